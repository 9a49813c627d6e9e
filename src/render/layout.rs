const MM_PER_INCH: f64 = 25.4;

/// Page geometry handed to the rendering engine, in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub paper_width_mm: f64,
    pub paper_height_mm: f64,
    pub margins: Margins,
    pub print_background: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top_mm: f64,
    pub right_mm: f64,
    pub bottom_mm: f64,
    pub left_mm: f64,
}

impl Margins {
    pub fn uniform(mm: f64) -> Self {
        Self {
            top_mm: mm,
            right_mm: mm,
            bottom_mm: mm,
            left_mm: mm,
        }
    }
}

impl PageLayout {
    /// A4 with 20mm margins and backgrounds printed.
    pub fn a4() -> Self {
        Self {
            paper_width_mm: 210.0,
            paper_height_mm: 297.0,
            margins: Margins::uniform(20.0),
            print_background: true,
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}
