use crate::models::*;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;
use std::io;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful restaurant assistant.";

pub const CLOSING_LINE: &str = "Would you like to know more about this?";

/// Builds the user prompt for one question. The prompt is not truncated.
pub fn build_prompt(dishes: &[&Dish], question: &str) -> String {
    let mut prompt = format!(
        "You are a helpful restaurant assistant. Use the following menu to answer the customer question. \
Mention substitutions, allergens, cross-contamination risks, and policy details when relevant. \
End with: '{CLOSING_LINE}'\n\n"
    );

    for dish in dishes {
        prompt.push_str(&format!("Dish: {}\n", dish.name()));
        prompt.push_str(&format!("Description: {}\n", dish.description()));
        prompt.push_str(&format!("Ingredients: {}\n", dish.ingredients().join(", ").trim()));
        prompt.push_str(&format!("Dietary Info: {}\n", render_json(dish.dietary_info())));
        prompt.push_str(&format!("Substitutions: {}\n", render_json(dish.substitutions())));
        prompt.push_str(&format!("Policies: {}\n\n", render_json(dish.policies())));
    }

    prompt.push_str(&format!("Customer Question: {question}\nAnswer:"));
    prompt
}

/// One-line JSON with `", "` and `": "` separators, keys in document order
/// and non-ASCII characters written as `\uXXXX` escapes.
pub fn render_json(value: &Value) -> String {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, SpacedFormatter);
    value
        .serialize(&mut ser)
        .expect("a JSON value always serializes into memory");
    String::from_utf8(out).expect("escaped JSON output is ASCII")
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut ascii_start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[ascii_start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            ascii_start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[ascii_start..].as_bytes())
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu_store::MenuStore;
    use serde_json::json;

    #[test]
    fn ends_with_question_and_answer_cue() {
        let prompt = build_prompt(&[], "Is the soup vegan?");
        assert!(prompt.ends_with("Customer Question: Is the soup vegan?\nAnswer:"));
    }

    #[test]
    fn preamble_asks_for_closing_line() {
        let prompt = build_prompt(&[], "hi");
        assert!(prompt.starts_with("You are a helpful restaurant assistant."));
        assert!(prompt.contains("End with: 'Would you like to know more about this?'\n\n"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let menu = MenuStore::parse(br#"[{"dish_name": "Bread"}]"#).unwrap();
        let dishes: Vec<&Dish> = menu.iter().collect();
        let prompt = build_prompt(&dishes, "q");

        assert!(prompt.contains("Dish: Bread\n"));
        assert!(prompt.contains("Description: No description.\n"));
        assert!(prompt.contains("Ingredients: \n"));
        assert!(prompt.contains("Dietary Info: {}\n"));
        assert!(prompt.contains("Substitutions: {}\n"));
        assert!(prompt.contains("Policies: {}\n\nCustomer Question: q\nAnswer:"));
    }

    #[test]
    fn renders_full_dish_block() {
        let menu = MenuStore::parse(
            br#"[{
                "dish_name": "Veggie Burger",
                "description": "Grilled patty",
                "ingredients": ["lettuce", "patty", "bun"],
                "dietary_info": {"vegan": false, "allergens": ["gluten", "soy"]},
                "substitutions": {"bun": "lettuce wrap"},
                "policies": {"cross_contamination": "shared grill"}
            }]"#,
        )
        .unwrap();
        let dishes: Vec<&Dish> = menu.iter().collect();
        let prompt = build_prompt(&dishes, "Is it vegan?");

        let expected = "Dish: Veggie Burger\n\
Description: Grilled patty\n\
Ingredients: lettuce, patty, bun\n\
Dietary Info: {\"vegan\": false, \"allergens\": [\"gluten\", \"soy\"]}\n\
Substitutions: {\"bun\": \"lettuce wrap\"}\n\
Policies: {\"cross_contamination\": \"shared grill\"}\n\n\
Customer Question: Is it vegan?\nAnswer:";
        assert!(prompt.ends_with(expected), "unexpected prompt:\n{prompt}");
    }

    #[test]
    fn dishes_appear_in_given_order() {
        let menu = MenuStore::parse(br#"[{"dish_name": "First"}, {"dish_name": "Second"}]"#).unwrap();
        let dishes: Vec<&Dish> = menu.iter().rev().collect();
        let prompt = build_prompt(&dishes, "q");

        let second = prompt.find("Dish: Second").unwrap();
        let first = prompt.find("Dish: First").unwrap();
        assert!(second < first);
    }

    #[test]
    fn nested_mapping_keeps_key_order() {
        let value = json!({"z": 1, "a": {"y": null, "b": 2.5}});
        assert_eq!(render_json(&value), r#"{"z": 1, "a": {"y": null, "b": 2.5}}"#);
    }

    #[test]
    fn non_ascii_is_escaped() {
        let value = json!({"note": "contains crème", "chef": "Zoë 🍣", "ok": "a\"b\n"});
        assert_eq!(
            render_json(&value),
            r#"{"note": "contains cr\u00e8me", "chef": "Zo\u00eb \ud83c\udf63", "ok": "a\"b\n"}"#
        );
    }

    #[test]
    fn accented_dish_fields_render_escaped() {
        let menu = MenuStore::parse(
            r#"[{"dish_name": "Crème Brûlée", "dietary_info": {"note": "contains crème"}}]"#.as_bytes(),
        )
        .unwrap();
        let dishes: Vec<&Dish> = menu.iter().collect();
        let prompt = build_prompt(&dishes, "q");

        assert!(prompt.contains("Dish: Crème Brûlée\n"));
        assert!(prompt.contains("Dietary Info: {\"note\": \"contains cr\\u00e8me\"}\n"));
    }

    #[test]
    fn odd_shaped_fields_render_as_json() {
        let menu = MenuStore::parse(
            br#"[{"dish_name": "Tofu Bowl", "description": 12, "ingredients": "tofu",
                  "dietary_info": ["vegan"], "substitutions": "none", "policies": null}]"#,
        )
        .unwrap();
        let dishes: Vec<&Dish> = menu.iter().collect();
        let prompt = build_prompt(&dishes, "q");

        assert!(prompt.contains("Description: 12\n"));
        assert!(prompt.contains("Ingredients: tofu\n"));
        assert!(prompt.contains("Dietary Info: [\"vegan\"]\n"));
        assert!(prompt.contains("Substitutions: \"none\"\n"));
        assert!(prompt.contains("Policies: {}\n"));
    }
}
