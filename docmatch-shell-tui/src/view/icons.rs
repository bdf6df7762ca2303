//! Terminal glyphs for shell icons

use docmatch_shell_core::IconId;

pub fn glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::Home => "⌂",
        IconId::Upload => "⇪",
        IconId::Search => "⌕",
        IconId::FileText => "▤",
        IconId::CreditCard => "▭",
        IconId::Settings => "⚙",
        IconId::BarChart => "▥",
        IconId::LogIn => "⇥",
        IconId::Sun => "☀",
        IconId::Moon => "☾",
    }
}
