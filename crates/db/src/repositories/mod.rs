//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod contact_form_repo;
pub mod contact_info_repo;
pub mod faq_repo;
pub mod feature_repo;
pub mod gallery_image_repo;
pub mod hero_repo;
pub mod navigation_repo;
pub mod portfolio_repo;
pub mod service_category_repo;
pub mod service_item_repo;
pub mod stat_repo;
pub mod team_repo;
pub mod testimonial_repo;

pub use about_repo::AboutRepo;
pub use contact_form_repo::ContactFormRepo;
pub use contact_info_repo::ContactInfoRepo;
pub use faq_repo::FaqRepo;
pub use feature_repo::FeatureRepo;
pub use gallery_image_repo::GalleryImageRepo;
pub use hero_repo::HeroRepo;
pub use navigation_repo::NavigationRepo;
pub use portfolio_repo::PortfolioRepo;
pub use service_category_repo::ServiceCategoryRepo;
pub use service_item_repo::ServiceItemRepo;
pub use stat_repo::StatRepo;
pub use team_repo::TeamRepo;
pub use testimonial_repo::TestimonialRepo;
