use crate::errors::AssistantResult;
use crate::models::*;
use std::fs;
use std::path::Path;

pub struct MenuStore;

impl MenuStore {
    /// Parses a JSON array of dish objects.
    pub fn parse(document: &[u8]) -> AssistantResult<Menu> {
        let dishes: Vec<Dish> = serde_json::from_slice(document)?;
        let menu = Menu::new(dishes);

        log::info!("Loaded menu with {} dishes", menu.len());
        Ok(menu)
    }

    pub fn load_file(path: impl AsRef<Path>) -> AssistantResult<Menu> {
        let path = path.as_ref();
        log::info!("Reading menu: {}", path.display());

        let bytes = fs::read(path)?;
        Self::parse(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AssistantError;
    use std::io::Write;

    const MENU: &str = r#"[
        {"dish_name": "Veggie Burger", "ingredients": ["lettuce", "patty"]},
        {"dish_name": "Caesar Salad", "description": "Romaine and croutons",
         "dietary_info": {"vegetarian": true}}
    ]"#;

    #[test]
    fn parses_dishes_in_document_order() {
        let menu = MenuStore::parse(MENU.as_bytes()).unwrap();
        let names: Vec<_> = menu.iter().map(Dish::name).collect();
        assert_eq!(names, ["Veggie Burger", "Caesar Salad"]);
    }

    #[test]
    fn parsing_twice_is_idempotent() {
        let first = MenuStore::parse(MENU.as_bytes()).unwrap();
        let second = MenuStore::parse(MENU.as_bytes()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.dishes()[0].description(), second.dishes()[0].description());
        assert_eq!(first.dishes()[0].ingredients(), second.dishes()[0].ingredients());
    }

    #[test]
    fn keeps_duplicate_names() {
        let menu = MenuStore::parse(br#"[{"dish_name": "Soup"}, {"dish_name": "Soup"}]"#).unwrap();
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn accepts_optional_fields_of_any_shape() {
        let menu = MenuStore::parse(
            br#"[{"dish_name": "Tofu Bowl", "dietary_info": ["vegan"]},
                 {"dish_name": "Miso Soup", "dietary_info": "vegan", "description": 12,
                  "substitutions": 3, "policies": true, "ingredients": {"base": "dashi"}}]"#,
        )
        .unwrap();
        assert_eq!(menu.len(), 2);

        let soup = &menu.dishes()[1];
        assert_eq!(soup.description(), "12");
        assert_eq!(soup.ingredients(), [r#"{"base": "dashi"}"#]);
        assert_eq!(crate::prompt::render_json(soup.dietary_info()), r#""vegan""#);
        assert_eq!(crate::prompt::render_json(soup.policies()), "true");
    }

    #[test]
    fn rejects_non_object_dish() {
        let err = MenuStore::parse(br#"["Veggie Burger"]"#).unwrap_err();
        assert!(matches!(err, AssistantError::Parse(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = MenuStore::parse(b"{not json").unwrap_err();
        assert!(matches!(err, AssistantError::Parse(_)));
    }

    #[test]
    fn rejects_dish_without_name() {
        let err = MenuStore::parse(br#"[{"description": "mystery"}]"#).unwrap_err();
        assert!(matches!(err, AssistantError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MENU.as_bytes()).unwrap();

        let menu = MenuStore::load_file(file.path()).unwrap();
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = MenuStore::load_file("/definitely/not/here/menu.json").unwrap_err();
        assert!(matches!(err, AssistantError::Io(_)));
    }
}
