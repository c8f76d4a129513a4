use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Warm paper-and-ink palette.
pub struct Journal;

impl Journal {
    pub fn default_journal_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Journal::AMBER);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Journal::CREAM);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.bold.set_fg(Journal::CREAM);
        skin.italic.set_fg(Journal::SAND);
        skin.table.set_fg(Journal::SAND);
        skin.bullet.set_fg(Journal::AMBER);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Journal::COCOA);
        skin.inline_code.set_fg(Journal::INK);
        skin.inline_code.set_bg(Journal::AMBER);

        skin
    }

    pub const CREAM: Color = Color::Rgb {
        r: 0xFD,
        g: 0xF1,
        b: 0xD0,
    }; // #FDF1D0
    pub const SAND: Color = Color::Rgb {
        r: 0xFF,
        g: 0xF9,
        b: 0xE6,
    }; // #FFF9E6
    pub const AMBER: Color = Color::Rgb {
        r: 0xF0,
        g: 0xC3,
        b: 0x8E,
    }; // #F0C38E
    pub const COCOA: Color = Color::Rgb {
        r: 0xA0,
        g: 0x7A,
        b: 0x6A,
    }; // #A07A6A
    pub const INK: Color = Color::Rgb {
        r: 0x5A,
        g: 0x3E,
        b: 0x36,
    }; // #5A3E36
}
