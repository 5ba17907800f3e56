/// One entry of the font picker: a display name and the family list handed to the text renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FontOption {
    pub name: &'static str,
    pub family: &'static str,
}

pub const FONT_OPTIONS: [FontOption; 7] = [
    FontOption {
        name: "Prompt (มาตรฐาน)",
        family: "'Prompt', sans-serif",
    },
    FontOption {
        name: "Kanit (ทันสมัย)",
        family: "'Kanit', sans-serif",
    },
    FontOption {
        name: "Noto Sans Thai (ทางการ)",
        family: "'Noto Sans Thai', sans-serif",
    },
    FontOption {
        name: "Montserrat (สากล)",
        family: "'Montserrat', sans-serif",
    },
    FontOption {
        name: "Playfair (หรูหราไฮเอนด์)",
        family: "'Playfair Display', serif",
    },
    FontOption {
        name: "Bodoni (แฟชั่นนิตยสาร)",
        family: "'Bodoni Moda', serif",
    },
    FontOption {
        name: "Libre Baskerville (พรีเมียม)",
        family: "'Libre Baskerville', serif",
    },
];

impl FontOption {
    pub fn default_font() -> Self {
        FONT_OPTIONS[0]
    }

    /// Look up a catalog entry by its family descriptor.
    pub fn by_family(family: &str) -> Option<Self> {
        FONT_OPTIONS.into_iter().find(|f| f.family == family)
    }
}

impl Default for FontOption {
    fn default() -> Self {
        Self::default_font()
    }
}

/// Pick the first font whose display name contains `keyword` (case-sensitive), else the first
/// font in the catalog.
pub fn match_font_keyword(keyword: &str) -> FontOption {
    FONT_OPTIONS
        .into_iter()
        .find(|f| f.name.contains(keyword))
        .unwrap_or_else(FontOption::default_font)
}

/// Display names joined for prompts.
pub(crate) fn font_names_for_prompt() -> String {
    FONT_OPTIONS
        .iter()
        .map(|f| f.name.split(" (").next().unwrap_or(f.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/content/fonts.rs"]
mod tests;
