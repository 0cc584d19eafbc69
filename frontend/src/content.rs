//! Static page content. Collections are fixed for the lifetime of the page.

pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub static NAV_ENTRIES: [NavEntry; 7] = [
    NavEntry { id: "home", label: "Home" },
    NavEntry { id: "about", label: "About" },
    NavEntry { id: "menu", label: "Menu" },
    NavEntry { id: "gallery", label: "Gallery" },
    NavEntry { id: "testimonials", label: "Reviews" },
    NavEntry { id: "reservation", label: "Reservations" },
    NavEntry { id: "contact", label: "Contact" },
];

pub fn section_ids() -> Vec<&'static str> {
    NAV_ENTRIES.iter().map(|entry| entry.id).collect()
}

pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub category: &'static str,
}

pub static MENU_CATEGORIES: [(&str, &str); 5] = [
    ("all", "All"),
    ("starters", "Starters"),
    ("mains", "Main Courses"),
    ("desserts", "Desserts"),
    ("drinks", "Drinks"),
];

pub static MENU_ITEMS: [MenuItem; 8] = [
    MenuItem { name: "Bruschetta al Pomodoro", description: "Grilled bread, heirloom tomatoes, basil, garlic", price: "$9", category: "starters" },
    MenuItem { name: "Burrata", description: "Creamy burrata, roasted peppers, aged balsamic", price: "$14", category: "starters" },
    MenuItem { name: "Truffle Risotto", description: "Arborio rice, black truffle, parmesan", price: "$26", category: "mains" },
    MenuItem { name: "Grilled Sea Bass", description: "Lemon butter sauce, seasonal vegetables", price: "$29", category: "mains" },
    MenuItem { name: "Tagliatelle al Ragù", description: "Fresh egg pasta, slow-cooked beef ragù", price: "$22", category: "mains" },
    MenuItem { name: "Tiramisu Deluxe", description: "Mascarpone, espresso, amaretto", price: "$11", category: "desserts" },
    MenuItem { name: "Panna Cotta", description: "Vanilla bean, wild berry coulis", price: "$9", category: "desserts" },
    MenuItem { name: "Negroni", description: "Gin, Campari, sweet vermouth", price: "$13", category: "drinks" },
];

pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub static GALLERY: [GalleryImage; 6] = [
    GalleryImage { src: "images/gallery-1.jpg", alt: "Dining room at dusk" },
    GalleryImage { src: "images/gallery-2.jpg", alt: "Fresh pasta being rolled" },
    GalleryImage { src: "images/gallery-3.jpg", alt: "Truffle risotto" },
    GalleryImage { src: "images/gallery-4.jpg", alt: "Wine cellar" },
    GalleryImage { src: "images/gallery-5.jpg", alt: "Terrace seating" },
    GalleryImage { src: "images/gallery-6.jpg", alt: "Tiramisu" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub stars: usize,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial { quote: "The best risotto I've had outside of Milan. Warm service and a cozy room.", author: "Sofia M.", stars: 5 },
    Testimonial { quote: "We celebrated our anniversary here and the staff made it unforgettable.", author: "James & Priya", stars: 5 },
    Testimonial { quote: "Great wine list, generous portions, and the tiramisu is a must.", author: "Daniel K.", stars: 4 },
];
