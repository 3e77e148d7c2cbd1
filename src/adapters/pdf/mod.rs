//! PDF rendering adapter built on `lopdf`.
//!
//! Produces a single-page document per pair with both images embedded as
//! image XObjects and captions set in the standard Helvetica faces.

mod content;
mod raster;

use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use crate::domain::layout::plan_page;
use crate::domain::{ImageSlot, PagePlan, PairDimensions, PairError, QuestionId};
use crate::ports::{DocumentRenderer, RenderRequest};

use content::{image_resource_name, page_content};
pub use raster::DecodedImage;

const PDF_VERSION: &str = "1.5";
const PRODUCER: &str = "qapdf";

/// Renders question/answer pairs with `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfRenderer;

impl LopdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, PairError> {
        let question = DecodedImage::decode(request.question).map_err(|reason| {
            PairError::UnreadableImage { path: request.question_path.to_string(), reason }
        })?;
        let answer = DecodedImage::decode(request.answer).map_err(|reason| {
            PairError::UnreadableImage { path: request.answer_path.to_string(), reason }
        })?;

        let dims = PairDimensions { question: question.dimensions(), answer: answer.dimensions() };
        let plan = plan_page(request.page, request.id, dims);
        tracing::debug!(id = %request.id, ?dims, "planned page");

        build_document(request.id, &plan, &question, &answer).map_err(PairError::Render)
    }
}

fn build_document(
    id: &QuestionId,
    plan: &PagePlan,
    question: &DecodedImage,
    answer: &DecodedImage,
) -> Result<Vec<u8>, String> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in plan.fonts() {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }

    let mut xobjects = Dictionary::new();
    for (slot, image) in [(ImageSlot::Question, question), (ImageSlot::Answer, answer)] {
        let image_id = doc.add_object(image.to_xobject());
        xobjects.set(image_resource_name(slot), image_id);
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
        "XObject" => xobjects,
    });

    let content = page_content(plan).encode().map_err(|e| e.to_string())?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), plan.width.into(), plan.height.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(format!("Question {}", id)),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(|e| e.to_string())?;
    Ok(buffer)
}
