use rust_xlsxwriter::{Color, Format, FormatAlign};

/// Accent color of the label column (`#1F4E79`).
pub const ACCENT: Color = Color::RGB(0x1F_4E_79);

/// Display mask for value cells. It groups and suffixes; stored values stay as fetched.
pub const MILLIONS_FORMAT: &str = "#,##0.00,,\"M\"";

/// Formats used by the sheet, built once per workbook.
pub(crate) struct Styles {
    pub(crate) title: Format,
    pub(crate) header: Format,
    pub(crate) name: Format,
    pub(crate) highlight: Format,
    pub(crate) millions: Format,
}

impl Styles {
    pub(crate) fn new() -> Self {
        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(14)
                .set_align(FormatAlign::VerticalCenter),
            header: Format::new()
                .set_bold()
                .set_text_wrap()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            name: Format::new()
                .set_font_color(ACCENT)
                .set_align(FormatAlign::VerticalCenter),
            highlight: Format::new().set_bold().set_font_color(ACCENT),
            millions: Format::new()
                .set_num_format(MILLIONS_FORMAT)
                .set_align(FormatAlign::VerticalCenter),
        }
    }
}
