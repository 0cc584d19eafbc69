use serde::{Deserialize, Serialize};

/// Category filter selected by the menu buttons
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MenuFilter {
    #[default]
    All,
    Category(String),
}

impl MenuFilter {
    /// Parse a button's category value; "all" shows everything
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => MenuFilter::All,
            other => MenuFilter::Category(other.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MenuFilter::All => "all",
            MenuFilter::Category(category) => category,
        }
    }

    pub fn shows(&self, item_category: &str) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Category(category) => category == item_category,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DailySpecial {
    pub name: &'static str,
    pub description: &'static str,
    pub discount: &'static str,
}

pub static SPECIALS: [DailySpecial; 3] = [
    DailySpecial {
        name: "Truffle Risotto",
        description: "Creamy arborio rice with black truffle and parmesan",
        discount: "20% OFF",
    },
    DailySpecial {
        name: "Grilled Sea Bass",
        description: "Fresh sea bass with lemon butter sauce and vegetables",
        discount: "15% OFF",
    },
    DailySpecial {
        name: "Tiramisu Deluxe",
        description: "Classic tiramisu with extra mascarpone and amaretto",
        discount: "Buy 1 Get 1 Free",
    },
];

/// Special for a weekday ordinal (0 = Sunday); the three specials rotate
pub fn todays_special(weekday: u32) -> &'static DailySpecial {
    &SPECIALS[weekday as usize % SPECIALS.len()]
}
