//! Single-page placement of a question image above its answer image.
//!
//! Planning is pure geometry in PDF user space (points, origin bottom-left).
//! The renderer adapter turns a [`PagePlan`] into content-stream operations.

pub mod metrics;

use crate::domain::QuestionId;
use crate::domain::configuration::{LayoutKind, PageConfig};

pub use metrics::text_width;

/// Points per centimetre.
pub const PT_PER_CM: f32 = 72.0 / 2.54;

/// Half-length of the separator rule drawn between question and answer.
const RULE_HALF_LENGTH: f32 = 100.0;

/// Standard PDF base fonts used for captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name used in the page's font dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    /// PDF base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }
}

/// Which of the pair's images a placement refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Question,
    Answer,
}

/// Axis-aligned rectangle, bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// One drawable item on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageElement {
    /// Text drawn with its baseline starting at (`x`, `y`).
    Text { text: String, font: Font, size: f32, x: f32, y: f32 },
    /// Straight stroked line.
    Rule { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Image scaled into `rect`.
    Image { slot: ImageSlot, rect: Rect },
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<PageElement>,
}

impl PagePlan {
    /// Placement of the given image, if the plan draws it.
    pub fn image_rect(&self, slot: ImageSlot) -> Option<Rect> {
        self.elements.iter().find_map(|element| match element {
            PageElement::Image { slot: s, rect } if *s == slot => Some(*rect),
            _ => None,
        })
    }

    /// Fonts referenced by text elements, without duplicates.
    pub fn fonts(&self) -> Vec<Font> {
        let mut fonts = Vec::new();
        for element in &self.elements {
            if let PageElement::Text { font, .. } = element {
                if !fonts.contains(font) {
                    fonts.push(*font);
                }
            }
        }
        fonts
    }
}

/// Pixel dimensions of the two images being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairDimensions {
    pub question: (u32, u32),
    pub answer: (u32, u32),
}

/// Scale an image to fit within `max_width` x `max_height` keeping its aspect
/// ratio. One pixel maps to one point; images are never enlarged.
pub fn fit(image: (u32, u32), max_width: f32, max_height: f32) -> (f32, f32) {
    let (w, h) = (image.0.max(1) as f32, image.1.max(1) as f32);
    let scale = (max_width / w).min(max_height / h).min(1.0);
    (w * scale, h * scale)
}

/// Plan the page for one pair.
pub fn plan_page(page: &PageConfig, id: &QuestionId, dims: PairDimensions) -> PagePlan {
    let (width, height) = page.size.dimensions();
    match page.layout {
        LayoutKind::Standard => plan_standard(width, height, page.margin_cm * PT_PER_CM, id, dims),
        LayoutKind::Compact => plan_compact(width, height, id, dims),
    }
}

fn centered_text(text: String, font: Font, size: f32, page_width: f32, baseline: f32) -> PageElement {
    let x = (page_width - text_width(&text, font, size)) / 2.0;
    PageElement::Text { text, font, size, x, y: baseline }
}

fn centered_image(slot: ImageSlot, size: (f32, f32), page_width: f32, top: f32) -> PageElement {
    let (w, h) = size;
    PageElement::Image { slot, rect: Rect { x: (page_width - w) / 2.0, y: top - h, width: w, height: h } }
}

fn centered_rule(page_width: f32, y: f32) -> PageElement {
    let center = page_width / 2.0;
    PageElement::Rule { x1: center - RULE_HALF_LENGTH, y1: y, x2: center + RULE_HALF_LENGTH, y2: y }
}

// Standard layout vertical rhythm, in points.
const TITLE_SIZE: f32 = 24.0;
const TITLE_SPACE_AFTER: f32 = 30.0;
const ID_SIZE: f32 = 14.0;
const ID_SPACE_AFTER: f32 = 20.0;
const SECTION_GAP: f32 = 40.0;
const RULE_BLOCK: f32 = 14.0;
const HEADING_SPACE_BEFORE: f32 = 30.0;
const HEADING_SIZE: f32 = 18.0;
const HEADING_SPACE_AFTER: f32 = 20.0;

const STANDARD_TEXT_HEIGHT: f32 = TITLE_SIZE
    + TITLE_SPACE_AFTER
    + ID_SIZE
    + ID_SPACE_AFTER
    + SECTION_GAP
    + RULE_BLOCK
    + HEADING_SPACE_BEFORE
    + HEADING_SIZE
    + HEADING_SPACE_AFTER;

fn plan_standard(width: f32, height: f32, margin: f32, id: &QuestionId, dims: PairDimensions) -> PagePlan {
    let content_width = width - 2.0 * margin;
    let content_height = height - 2.0 * margin;
    let max_image_width = (content_width - 2.0 * PT_PER_CM).max(1.0);
    let max_image_height = ((content_height - STANDARD_TEXT_HEIGHT) / 2.0).max(1.0);

    let question = fit(dims.question, max_image_width, max_image_height);
    let answer = fit(dims.answer, max_image_width, max_image_height);

    let mut elements = Vec::with_capacity(7);
    let mut cursor = height - margin;

    elements.push(centered_text("Question".to_string(), Font::Bold, TITLE_SIZE, width, cursor - TITLE_SIZE));
    cursor -= TITLE_SIZE + TITLE_SPACE_AFTER;

    elements.push(centered_text(format!("Question ID: {}", id), Font::Regular, ID_SIZE, width, cursor - ID_SIZE));
    cursor -= ID_SIZE + ID_SPACE_AFTER;

    elements.push(centered_image(ImageSlot::Question, question, width, cursor));
    cursor -= question.1 + SECTION_GAP;

    elements.push(centered_rule(width, cursor - RULE_BLOCK / 2.0));
    cursor -= RULE_BLOCK + HEADING_SPACE_BEFORE;

    elements.push(centered_text("Answer".to_string(), Font::Bold, HEADING_SIZE, width, cursor - HEADING_SIZE));
    cursor -= HEADING_SIZE + HEADING_SPACE_AFTER;

    elements.push(centered_image(ImageSlot::Answer, answer, width, cursor));

    PagePlan { width, height, elements }
}

// Compact layout offsets, in points from the page top unless noted.
const COMPACT_TITLE_OFFSET: f32 = 80.0;
const COMPACT_ID_OFFSET: f32 = 110.0;
const COMPACT_IMAGE_OFFSET: f32 = 150.0;
const COMPACT_RESERVED: f32 = 200.0;
const COMPACT_QUESTION_SHARE: f32 = 2.2;
const COMPACT_HEADING_GAP: f32 = 80.0;
const COMPACT_RULE_RISE: f32 = 30.0;
const COMPACT_ANSWER_GAP: f32 = 40.0;
/// Headroom kept below the heading baseline for the answer image.
const COMPACT_ANSWER_RESERVED: f32 = 100.0;

fn plan_compact(width: f32, height: f32, id: &QuestionId, dims: PairDimensions) -> PagePlan {
    let max_image_width = (width - 4.0 * PT_PER_CM).max(1.0);

    let question = fit(dims.question, max_image_width, ((height - COMPACT_RESERVED) / COMPACT_QUESTION_SHARE).max(1.0));
    let question_top = height - COMPACT_IMAGE_OFFSET;
    let heading_baseline = question_top - question.1 - COMPACT_HEADING_GAP;

    let answer = fit(dims.answer, max_image_width, (heading_baseline - COMPACT_ANSWER_RESERVED).max(1.0));

    let elements = vec![
        centered_text("Question".to_string(), Font::Bold, TITLE_SIZE, width, height - COMPACT_TITLE_OFFSET),
        centered_text(format!("Question ID: {}", id), Font::Regular, ID_SIZE, width, height - COMPACT_ID_OFFSET),
        centered_image(ImageSlot::Question, question, width, question_top),
        centered_rule(width, heading_baseline + COMPACT_RULE_RISE),
        centered_text("Answer".to_string(), Font::Bold, HEADING_SIZE, width, heading_baseline),
        centered_image(ImageSlot::Answer, answer, width, heading_baseline - COMPACT_ANSWER_GAP),
    ];

    PagePlan { width, height, elements }
}
