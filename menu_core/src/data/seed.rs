use super::{
    category::Category,
    dish::{DishDraft, ImageReference},
};

/// A dish of the built-in menu.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SeedDish {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    /// File name of the bundled photo.
    pub asset: &'static str,
}

impl SeedDish {
    pub fn to_draft(&self) -> DishDraft {
        DishDraft::new(self.name, self.price, self.description)
            .with_image(ImageReference::BundledAsset(self.asset.to_owned()))
    }
}

const STARTERS: &[SeedDish] = &[
    SeedDish {
        name: "Tomato Soup",
        price: "R85",
        description: "A creamy and flavorful tomato soup.",
        asset: "tomato-soup.png",
    },
    SeedDish {
        name: "Bruschetta",
        price: "R115",
        description: "Grilled bread topped with fresh tomato and basil.",
        asset: "bruschetta.png",
    },
    SeedDish {
        name: "Spring Rolls",
        price: "R95",
        description: "Crispy rolls filled with fresh vegetables.",
        asset: "spring-rolls.png",
    },
];

const MAINS: &[SeedDish] = &[
    SeedDish {
        name: "Grilled Chicken",
        price: "R145",
        description: "Juicy grilled chicken served with a side of veggies and mashed potatoes.",
        asset: "grilled-chicken.png",
    },
    SeedDish {
        name: "Beef Steak",
        price: "R200",
        description: "Tender beef steak cooked to your preference with a side of garlic butter \
                      and fries.",
        asset: "beef-steak.png",
    },
    SeedDish {
        name: "Vegetable Stir Fry",
        price: "R110",
        description: "A healthy mix of seasonal vegetables stir-fried with a soy-based sauce.",
        asset: "vegetable-stir-fry.png",
    },
    SeedDish {
        name: "Pasta Carbonara",
        price: "R130",
        description: "A creamy pasta dish with bacon, parmesan, and a touch of black pepper.",
        asset: "pasta-carbonara.png",
    },
];

const DESSERTS: &[SeedDish] = &[
    SeedDish {
        name: "Chocolate Lava Cake",
        price: "R95",
        description: "A rich chocolate cake with a molten center, served with vanilla ice cream.",
        asset: "chocolate-lava-cake.png",
    },
    SeedDish {
        name: "Cheesecake",
        price: "R120",
        description: "A smooth, creamy cheesecake with a graham cracker crust and a berry \
                      compote topping.",
        asset: "cheesecake.png",
    },
    SeedDish {
        name: "Fruit Salad",
        price: "R70",
        description: "A fresh and vibrant mix of seasonal fruits, perfect for a light dessert.",
        asset: "fruit-salad.png",
    },
    SeedDish {
        name: "Tiramisu",
        price: "R110",
        description: "A classic Italian dessert with layers of coffee-soaked ladyfingers and \
                      mascarpone cheese.",
        asset: "tiramisu.png",
    },
];

/// The built-in dishes of a category, in menu order.
pub fn seed_for(category: Category) -> &'static [SeedDish] {
    match category {
        Category::Starters => STARTERS,
        Category::Mains => MAINS,
        Category::Desserts => DESSERTS,
    }
}
