use std::sync::LazyLock;

use thiserror::Error;

pub const PROFILE_IMAGE: &str = "/images/profile.jpg";

static PROJECTS: LazyLock<Vec<Project>> =
    LazyLock::new(|| build_projects().expect("shipped project content should be valid"));
static LOGOS: LazyLock<Vec<Logo>> =
    LazyLock::new(|| build_logos().expect("shipped logo content should be valid"));

/// The featured projects, in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// The logo showcase entries, in display order.
pub fn logos() -> &'static [Logo] {
    &LOGOS
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("media sequence is empty")]
    EmptyMedia,
    #[error("logo asset `{0}` is not an image")]
    LogoNotImage(&'static str),
    #[error("link `{0}` is not an absolute URL")]
    RelativeLink(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One displayable asset, referenced by path or URL. The kind is derived
/// from the reference's suffix: `.mp4` means video, anything else an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    src: &'static str,
}

impl MediaItem {
    pub fn new(src: &'static str) -> Self {
        Self { src }
    }

    pub fn src(&self) -> &'static str {
        self.src
    }

    pub fn kind(&self) -> MediaKind {
        if self.src.ends_with(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// An ordered media sequence, non-empty by construction. Every carousel is
/// built from a `MediaSet`, so index arithmetic downstream never divides by
/// zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSet {
    items: Vec<MediaItem>,
}

impl MediaSet {
    pub fn new(items: Vec<MediaItem>) -> Result<Self, ContentError> {
        if items.is_empty() {
            return Err(ContentError::EmptyMedia);
        }
        Ok(Self { items })
    }

    pub fn from_sources(sources: &[&'static str]) -> Result<Self, ContentError> {
        Self::new(sources.iter().copied().map(MediaItem::new).collect())
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Optional outbound links for a project. Each present link must be an
/// absolute URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub repository: Option<&'static str>,
    pub design: Option<&'static str>,
    pub live: Option<&'static str>,
}

impl ProjectLinks {
    fn validate(&self) -> Result<(), ContentError> {
        for link in [self.repository, self.design, self.live].into_iter().flatten() {
            if !is_absolute_url(link) {
                return Err(ContentError::RelativeLink(link));
            }
        }
        Ok(())
    }
}

fn is_absolute_url(s: &str) -> bool {
    s.starts_with("https://") || s.starts_with("http://")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub media: MediaSet,
    pub tags: &'static [&'static str],
    pub links: ProjectLinks,
}

impl Project {
    pub fn new(
        title: &'static str,
        description: &'static str,
        media_sources: &[&'static str],
        tags: &'static [&'static str],
        links: ProjectLinks,
    ) -> Result<Self, ContentError> {
        links.validate()?;
        Ok(Self {
            title,
            description,
            media: MediaSet::from_sources(media_sources)?,
            tags,
            links,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub title: &'static str,
    pub image: MediaItem,
    pub description: &'static str,
}

impl Logo {
    pub fn new(
        title: &'static str,
        image: &'static str,
        description: &'static str,
    ) -> Result<Self, ContentError> {
        let image = MediaItem::new(image);
        if image.kind() != MediaKind::Image {
            return Err(ContentError::LogoNotImage(image.src()));
        }
        Ok(Self {
            title,
            image,
            description,
        })
    }
}

fn build_projects() -> Result<Vec<Project>, ContentError> {
    Ok(vec![
        Project::new(
            "Online SuperMarket Platform",
            "A full-stack platform that lets users compare shopping cart prices, \
             including delivery fees, across supermarkets and automatically transfers \
             their cart to the selected supermarket's checkout.",
            &[
                "/images/superEZopenSlide.png",
                "/videos/SuperEz1.mp4",
                "/videos/SuperEz2.mp4",
            ],
            &[
                "React",
                "Html",
                "CSS",
                "Python",
                "TypeScript",
                "JavaScript",
                "Node.js",
                "MongoDB",
                "Material Design",
            ],
            ProjectLinks {
                repository: Some("https://github.com/ofekshp/SuperEZ"),
                design: Some(
                    "https://www.figma.com/design/hvtMERuXEn6wGSgLbElbLA/SuperEZ?node-id=34-2280&t=zLtRCexOLNgRTois-1",
                ),
                ..Default::default()
            },
        )?,
        Project::new(
            "Mobile Pet Adoption Application",
            "Enables search for pets to adopt by location on the map.",
            &[
                "/images/1.png",
                "/images/2.png",
                "/images/3.png",
                "/images/4.png",
                "/images/5.png",
                "/images/6.png",
            ],
            &["Kotlin", "XML", "Google Maps API", "Firebase"],
            ProjectLinks {
                repository: Some("https://github.com/mayageva11/GetPet.git"),
                ..Default::default()
            },
        )?,
        Project::new(
            "Social Food MarketPlace",
            "Complete full-stack brand identity design including logo, typography, \
             and design system documentation.",
            &["/images/bono.png", "/videos/bonoWebsite.mp4"],
            &["Branding", "UI Design", "Design Systems"],
            ProjectLinks {
                design: Some(
                    "https://www.figma.com/design/BK5EoKF9MORGbtBLVB8dCI/Bono-Website?node-id=0-1&t=j5KK8GdWrg5QZY5C-1",
                ),
                live: Some("https://www.bonoeat.com/"),
                ..Default::default()
            },
        )?,
        Project::new(
            "Lawyer Business Website",
            "A modern lawyer website focused on conveying professionalism with a clean design.",
            &["/images/IritWebsite.png", "/videos/IritRanCohen.mp4"],
            &[
                "UI/UX",
                "React",
                "Html",
                "CSS",
                "TypeScript",
                "Node.js",
                "logo",
                "marketing",
            ],
            ProjectLinks {
                repository: Some("https://github.com/AdiNehama/irit_rancohen.git"),
                live: Some("https://irit-ran-cohen.onrender.com/"),
                ..Default::default()
            },
        )?,
    ])
}

fn build_logos() -> Result<Vec<Logo>, ContentError> {
    Ok(vec![
        Logo::new(
            "Supermarket Price Comparison Logo",
            "/images/SuperEZlogo.png",
            "A fun logo in the shape of a shopping cart that aligns with the website's message.",
        )?,
        Logo::new(
            "Lawyer Brand Logo",
            "/images/IritRanCohenlogo.jpg",
            "Official and minimalist logo that conveys representation and professionalism.",
        )?,
        Logo::new(
            "Pet Adoption Platform Logo",
            "/images/GetPetlogo.png",
            "A friendly logo that catches the eye, with soft and pleasant colors.",
        )?,
        Logo::new(
            "Gaming Tech Startup Logo",
            "/images/Picologo.png",
            "Playful and modern logo for a gaming tech startup.",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_suffix() {
        assert_eq!(MediaItem::new("/videos/clip.mp4").kind(), MediaKind::Video);
        assert_eq!(MediaItem::new("/images/shot.png").kind(), MediaKind::Image);
        assert_eq!(MediaItem::new("/images/photo.jpg").kind(), MediaKind::Image);
        assert_eq!(MediaItem::new("https://cdn.example.com/a.webp").kind(), MediaKind::Image);
        // no suffix at all still counts as an image
        assert_eq!(MediaItem::new("/images/raw").kind(), MediaKind::Image);
    }

    #[test]
    fn test_empty_media_set_rejected() {
        assert_eq!(MediaSet::new(Vec::new()), Err(ContentError::EmptyMedia));
        assert_eq!(MediaSet::from_sources(&[]), Err(ContentError::EmptyMedia));
    }

    #[test]
    fn test_media_set_preserves_order() {
        let set = MediaSet::from_sources(&["/a.png", "/b.mp4", "/c.png"]).unwrap();
        assert_eq!(set.len(), 3);
        let sources: Vec<_> = set.items().iter().map(|m| m.src()).collect();
        assert_eq!(sources, vec!["/a.png", "/b.mp4", "/c.png"]);
        assert_eq!(set.get(1).unwrap().kind(), MediaKind::Video);
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_project_with_empty_media_rejected() {
        let res = Project::new("Empty", "no media", &[], &[], ProjectLinks::default());
        assert_eq!(res.unwrap_err(), ContentError::EmptyMedia);
    }

    #[test]
    fn test_relative_link_rejected() {
        let links = ProjectLinks {
            repository: Some("github.com/someone/repo"),
            ..Default::default()
        };
        let res = Project::new("Linked", "bad link", &["/a.png"], &[], links);
        assert_eq!(
            res.unwrap_err(),
            ContentError::RelativeLink("github.com/someone/repo")
        );
    }

    #[test]
    fn test_logo_must_reference_an_image() {
        let res = Logo::new("Moving Logo", "/videos/logo.mp4", "animated");
        assert_eq!(
            res.unwrap_err(),
            ContentError::LogoNotImage("/videos/logo.mp4")
        );
    }

    #[test]
    fn test_shipped_content_is_valid() {
        let projects = projects();
        assert_eq!(projects.len(), 4);
        for project in projects {
            assert!(!project.media.is_empty());
            assert!(!project.title.is_empty());
        }
        // the first project mixes stills and clips; pin the suffix-derived kinds
        let mixed = &projects[0].media;
        assert_eq!(mixed.get(0).unwrap().kind(), MediaKind::Image);
        assert_eq!(mixed.get(1).unwrap().kind(), MediaKind::Video);

        let logos = logos();
        assert_eq!(logos.len(), 4);
        for logo in logos {
            assert_eq!(logo.image.kind(), MediaKind::Image);
        }
    }
}
