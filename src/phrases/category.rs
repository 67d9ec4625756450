use std::fmt;

use super::data::{CITIES, COUNTIES, COUNTRIES};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    Custom,
    Countries,
    Counties,
    Cities,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Custom,
        Category::Countries,
        Category::Counties,
        Category::Cities,
    ];

    /// Look up the category the player typed.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::phrases::Category;
    /// assert_eq!(Category::from_id(2), Some(Category::Counties));
    /// assert_eq!(Category::from_id(-1), None);
    /// assert_eq!(Category::from_id(4), None);
    /// ```
    pub fn from_id(id: i64) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn id(self) -> i64 {
        match self {
            Category::Custom => 0,
            Category::Countries => 1,
            Category::Counties => 2,
            Category::Cities => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Custom => "Custom",
            Category::Countries => "Countries",
            Category::Counties => "Counties",
            Category::Cities => "Cities",
        }
    }

    /// The fixed list behind a category, `None` for [`Category::Custom`].
    pub fn built_in(self) -> Option<&'static [&'static str]> {
        match self {
            Category::Custom => None,
            Category::Countries => Some(&COUNTRIES[..]),
            Category::Counties => Some(&COUNTIES[..]),
            Category::Cities => Some(&CITIES[..]),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}. {}", self.id(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
    }

    #[test]
    fn unknown_ids() {
        assert_eq!(Category::from_id(-1), None);
        assert_eq!(Category::from_id(4), None);
        assert_eq!(Category::from_id(i64::MAX), None);
    }

    #[test]
    fn menu_entry() {
        assert_eq!(Category::Countries.to_string(), "  1. Countries");
        assert_eq!(Category::Custom.to_string(), "  0. Custom");
    }

    #[test]
    fn only_custom_has_no_built_in_list() {
        assert!(Category::Custom.built_in().is_none());
        assert_eq!(Category::Cities.built_in().map(|l| l.len()), Some(10));
    }
}
