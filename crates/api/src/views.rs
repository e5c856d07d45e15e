//! Read representations of media-bearing records.
//!
//! Each view flattens the stored row and adds one `<field>_url` per media
//! field, resolved against the server's public base URL.

use pixelbox_core::media::MediaResolver;
use pixelbox_db::models::hero::Hero;
use pixelbox_db::models::navigation::Navigation;
use pixelbox_db::models::portfolio::{PortfolioGalleryImage, PortfolioProject};
use pixelbox_db::models::team::TeamMember;
use pixelbox_db::models::testimonial::Testimonial;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NavigationView {
    #[serde(flatten)]
    pub navigation: Navigation,
    pub logo_url: Option<String>,
}

impl NavigationView {
    pub fn new(navigation: Navigation, media: &MediaResolver) -> Self {
        let logo_url = media.resolve(&navigation.logo);
        Self {
            navigation,
            logo_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeroView {
    #[serde(flatten)]
    pub hero: Hero,
    pub video_url: Option<String>,
    pub video_portrait_url: Option<String>,
    pub image_url: Option<String>,
    pub image_portrait_url: Option<String>,
    pub logo_url: Option<String>,
}

impl HeroView {
    pub fn new(hero: Hero, media: &MediaResolver) -> Self {
        Self {
            video_url: media.resolve(&hero.video),
            video_portrait_url: media.resolve(&hero.video_portrait),
            image_url: media.resolve(&hero.image),
            image_portrait_url: media.resolve(&hero.image_portrait),
            logo_url: media.resolve(&hero.logo),
            hero,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TestimonialView {
    #[serde(flatten)]
    pub testimonial: Testimonial,
    pub photo_url: Option<String>,
}

impl TestimonialView {
    pub fn new(testimonial: Testimonial, media: &MediaResolver) -> Self {
        let photo_url = media.resolve(&testimonial.photo);
        Self {
            testimonial,
            photo_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamMemberView {
    #[serde(flatten)]
    pub member: TeamMember,
    pub image_url: Option<String>,
}

impl TeamMemberView {
    pub fn new(member: TeamMember, media: &MediaResolver) -> Self {
        let image_url = media.resolve(&member.image);
        Self { member, image_url }
    }
}

#[derive(Debug, Serialize)]
pub struct GalleryImageView {
    #[serde(flatten)]
    pub image: PortfolioGalleryImage,
    pub image_url: Option<String>,
}

impl GalleryImageView {
    pub fn new(image: PortfolioGalleryImage, media: &MediaResolver) -> Self {
        let image_url = media.resolve(&image.image);
        Self { image, image_url }
    }
}

/// List representation of a portfolio project (no gallery).
#[derive(Debug, Serialize)]
pub struct PortfolioProjectView {
    #[serde(flatten)]
    pub project: PortfolioProject,
    pub media_url: Option<String>,
}

impl PortfolioProjectView {
    pub fn new(project: PortfolioProject, media: &MediaResolver) -> Self {
        let media_url = media.resolve(&project.media);
        Self { project, media_url }
    }
}

/// Detail representation of a portfolio project with its gallery embedded.
#[derive(Debug, Serialize)]
pub struct PortfolioDetailView {
    #[serde(flatten)]
    pub project: PortfolioProjectView,
    pub gallery_images: Vec<GalleryImageView>,
}

impl PortfolioDetailView {
    pub fn new(
        project: PortfolioProject,
        gallery: Vec<PortfolioGalleryImage>,
        media: &MediaResolver,
    ) -> Self {
        Self {
            project: PortfolioProjectView::new(project, media),
            gallery_images: gallery
                .into_iter()
                .map(|image| GalleryImageView::new(image, media))
                .collect(),
        }
    }
}

/// Resolve a whole list with one constructor.
pub fn resolve_all<T, V>(
    rows: Vec<T>,
    media: &MediaResolver,
    view: impl Fn(T, &MediaResolver) -> V,
) -> Vec<V> {
    rows.into_iter().map(|row| view(row, media)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pixelbox_core::media::MediaRef;
    use sqlx::types::Json;

    use super::*;

    fn member(image: MediaRef) -> TeamMember {
        TeamMember {
            id: 1,
            name: "Maya Patel".into(),
            role: "Creative Director".into(),
            bio: "Leads the studio.".into(),
            image: Json(image),
            social_links: Json(Default::default()),
            sort_order: 0,
            is_featured: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn view_carries_tagged_and_resolved_media() {
        let media = MediaResolver::new("http://localhost:8000");
        let view = TeamMemberView::new(
            member(MediaRef::Uploaded {
                path: "team/maya.jpg".into(),
            }),
            &media,
        );
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["image"]["kind"], "uploaded");
        assert_eq!(json["image_url"], "http://localhost:8000/media/team/maya.jpg");
        assert_eq!(json["order"], 0);
        assert_eq!(json["name"], "Maya Patel");
    }

    #[test]
    fn missing_media_serializes_as_null() {
        let media = MediaResolver::new("http://localhost:8000");
        let view = TeamMemberView::new(member(MediaRef::None), &media);
        let json = serde_json::to_value(&view).unwrap();

        assert!(json["image_url"].is_null());
    }
}
