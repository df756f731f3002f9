use crate::particles::FieldPreset;

/// Site page identified from the location path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Shop,
    Guides,
    Socials,
    Blog,
    Contact,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Shop,
        Page::Guides,
        Page::Socials,
        Page::Blog,
        Page::Contact,
    ];

    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Page::Home),
            "/about" => Some(Page::About),
            "/shop" => Some(Page::Shop),
            "/guides" => Some(Page::Guides),
            "/socials" => Some(Page::Socials),
            "/blog" => Some(Page::Blog),
            "/contact" => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Shop => "/shop",
            Page::Guides => "/guides",
            Page::Socials => "/socials",
            Page::Blog => "/blog",
            Page::Contact => "/contact",
        }
    }

    /// Bubble background for this page, if it has one.
    pub fn field_preset(self) -> Option<FieldPreset> {
        match self {
            Page::Home => Some(FieldPreset::Lively),
            Page::About | Page::Shop | Page::Guides | Page::Socials => Some(FieldPreset::Calm),
            Page::Blog | Page::Contact => None,
        }
    }

    /// Stack bubbles by depth instead of on one flat layer. Only the
    /// guides page does this.
    pub fn depth_layering(self) -> bool {
        matches!(self, Page::Guides)
    }
}
