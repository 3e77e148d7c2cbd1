//! Page plan to content-stream operations.

use lopdf::Object;
use lopdf::content::{Content, Operation};

use crate::domain::{ImageSlot, PageElement, PagePlan};

const TEXT_GRAY: f32 = 0.2;
const RULE_GRAY: f32 = 0.6;

/// Resource name of the image XObject for a slot.
pub fn image_resource_name(slot: ImageSlot) -> &'static str {
    match slot {
        ImageSlot::Question => "Im1",
        ImageSlot::Answer => "Im2",
    }
}

pub fn page_content(plan: &PagePlan) -> Content {
    let mut operations = Vec::new();
    for element in &plan.elements {
        match element {
            PageElement::Text { text, font, size, x, y } => {
                operations.extend([
                    Operation::new("BT", vec![]),
                    Operation::new("rg", vec![TEXT_GRAY.into(), TEXT_GRAY.into(), TEXT_GRAY.into()]),
                    Operation::new("Tf", vec![font.resource_name().into(), (*size).into()]),
                    Operation::new("Td", vec![(*x).into(), (*y).into()]),
                    Operation::new("Tj", vec![Object::string_literal(text.as_str())]),
                    Operation::new("ET", vec![]),
                ]);
            }
            PageElement::Rule { x1, y1, x2, y2 } => {
                operations.extend([
                    Operation::new("q", vec![]),
                    Operation::new("RG", vec![RULE_GRAY.into(), RULE_GRAY.into(), RULE_GRAY.into()]),
                    Operation::new("w", vec![1.into()]),
                    Operation::new("m", vec![(*x1).into(), (*y1).into()]),
                    Operation::new("l", vec![(*x2).into(), (*y2).into()]),
                    Operation::new("S", vec![]),
                    Operation::new("Q", vec![]),
                ]);
            }
            PageElement::Image { slot, rect } => {
                operations.extend([
                    Operation::new("q", vec![]),
                    Operation::new(
                        "cm",
                        vec![
                            rect.width.into(),
                            0.into(),
                            0.into(),
                            rect.height.into(),
                            rect.x.into(),
                            rect.y.into(),
                        ],
                    ),
                    Operation::new("Do", vec![image_resource_name(*slot).into()]),
                    Operation::new("Q", vec![]),
                ]);
            }
        }
    }
    Content { operations }
}
