use std::fmt;

use crate::{
    content::fonts::FontOption,
    content::model::{ContentModel, Family},
    foundation::error::{StudioError, StudioResult},
    scene::model::Scene,
    template::{live, review},
};

/// Layouts of the review screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ReviewTemplate {
    /// Two tilted before-shots bottom-left, quote block on the right.
    #[serde(rename = "STYLE_1")]
    ElegantReveal,
    /// Orange-framed inset column and the fixed "HI-END" tagline.
    #[serde(rename = "STYLE_2")]
    HiEndGlow,
    /// Large headline with the promotion as a ruled list.
    #[serde(rename = "STYLE_3")]
    FocusList,
    /// LIVE badge, headline ribbon, promotion lines.
    #[serde(rename = "LIVE")]
    LiveCaption,
}

/// Layouts of the live-commerce screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LiveTemplate {
    #[serde(rename = "LIVE_MINIMAL")]
    MinimalCorner,
    #[serde(rename = "LIVE_BANNER")]
    BottomBanner,
    #[serde(rename = "LIVE_SIDEBAR")]
    SideBar,
    #[serde(rename = "LIVE_FULL_PROMO")]
    FullPromo,
}

impl ReviewTemplate {
    pub const ALL: [Self; 4] = [
        Self::ElegantReveal,
        Self::HiEndGlow,
        Self::FocusList,
        Self::LiveCaption,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::ElegantReveal => "STYLE_1",
            Self::HiEndGlow => "STYLE_2",
            Self::FocusList => "STYLE_3",
            Self::LiveCaption => "LIVE",
        }
    }

    /// Label shown on the picker button.
    pub fn label(self) -> &'static str {
        match self {
            Self::ElegantReveal => "ดีไซน์ 1",
            Self::HiEndGlow => "ดีไซน์ 2",
            Self::FocusList => "ดีไซน์ 3",
            Self::LiveCaption => "โหมด LIVE",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::ElegantReveal => "Elegant reveal, quote on the right with before photos",
            Self::HiEndGlow => "Hi-end glow, premium orange framed photos",
            Self::FocusList => "Focus list, big headline with bullet benefits",
            Self::LiveCaption => "Live mode, LIVE badge with bold title",
        }
    }
}

impl LiveTemplate {
    pub const ALL: [Self; 4] = [
        Self::MinimalCorner,
        Self::BottomBanner,
        Self::SideBar,
        Self::FullPromo,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::MinimalCorner => "LIVE_MINIMAL",
            Self::BottomBanner => "LIVE_BANNER",
            Self::SideBar => "LIVE_SIDEBAR",
            Self::FullPromo => "LIVE_FULL_PROMO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MinimalCorner => "มุมเรียบ",
            Self::BottomBanner => "แบนเนอร์ล่าง",
            Self::SideBar => "แถบข้าง",
            Self::FullPromo => "โปรเต็มจอ",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::MinimalCorner => "Clean, corner focus",
            Self::BottomBanner => "Full bottom banner with price",
            Self::SideBar => "Side info bar",
            Self::FullPromo => "Heavy promotional text",
        }
    }
}

/// A template of either family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TemplateId {
    Review(ReviewTemplate),
    Live(LiveTemplate),
}

impl TemplateId {
    /// Template a fresh session of `family` starts with.
    pub fn default_for(family: Family) -> Self {
        match family {
            Family::Review => Self::Review(ReviewTemplate::ElegantReveal),
            Family::Live => Self::Live(LiveTemplate::MinimalCorner),
        }
    }

    pub fn all(family: Family) -> Vec<Self> {
        match family {
            Family::Review => ReviewTemplate::ALL.into_iter().map(Self::Review).collect(),
            Family::Live => LiveTemplate::ALL.into_iter().map(Self::Live).collect(),
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::Review(_) => Family::Review,
            Self::Live(_) => Family::Live,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Review(t) => t.id(),
            Self::Live(t) => t.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Review(t) => t.label(),
            Self::Live(t) => t.label(),
        }
    }

    /// Resolve a free-text identifier within `family`.
    ///
    /// Surrounding whitespace and letter case are ignored, since the identifier often comes back
    /// from a language model; anything else must match exactly.
    pub fn parse_in(family: Family, raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        Self::all(family)
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(wanted))
    }

    /// Like [`TemplateId::parse_in`] but reports unknown identifiers as validation errors.
    pub fn parse_strict(family: Family, raw: &str) -> StudioResult<Self> {
        Self::parse_in(family, raw).ok_or_else(|| {
            StudioError::validation(format!("'{raw}' is not a {family:?} template identifier"))
        })
    }

    /// Produce the visual tree for this template. Pure and deterministic.
    pub fn render(self, content: &ContentModel, font: FontOption) -> Scene {
        match self {
            Self::Review(ReviewTemplate::ElegantReveal) => review::elegant_reveal(content, font),
            Self::Review(ReviewTemplate::HiEndGlow) => review::hi_end_glow(content, font),
            Self::Review(ReviewTemplate::FocusList) => review::focus_list(content, font),
            Self::Review(ReviewTemplate::LiveCaption) => review::live_caption(content, font),
            Self::Live(LiveTemplate::MinimalCorner) => live::minimal_corner(content, font),
            Self::Live(LiveTemplate::BottomBanner) => live::bottom_banner(content, font),
            Self::Live(LiveTemplate::SideBar) => live::side_bar(content, font),
            Self::Live(LiveTemplate::FullPromo) => live::full_promo(content, font),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Bullet list of `family`'s templates for assistant prompts.
pub(crate) fn templates_for_prompt(family: Family) -> String {
    TemplateId::all(family)
        .into_iter()
        .map(|t| {
            let blurb = match t {
                TemplateId::Review(r) => r.blurb(),
                TemplateId::Live(l) => l.blurb(),
            };
            format!("- {} ({blurb})", t.id())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/template/registry.rs"]
mod tests;
