/// Short blurbs shown next to the taste options of a menu item.
const TASTE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Savory", "Highlights delightful savory notes."),
    ("Umami", "Packed with rich umami flavour."),
    ("Mild Spicy", "Offers a pleasant, mild kick."),
    ("Slightly Sweet", "Features a subtle sweetness."),
    ("Spicy", "Delivers a bold, spicy heat."),
    ("Garlicky", "Infused with aromatic garlic."),
    ("Zesty", "Brightened with a zesty flavour."),
    ("Smoky", "Carries a distinct smoky taste."),
    ("Bitter", "Showcases a sophisticated bitterness."),
    ("Smooth", "Boasts a wonderfully smooth texture/flavour."),
    ("Nutty", "Complemented by nutty undertones."),
    ("Sweet", "Satisfies with a sweet profile."),
    ("Fruity", "Enhanced with fruity notes."),
    ("Creamy", "Indulgent and creamy."),
    ("Rich", "Offers a deeply rich taste."),
    ("Decadent", "A truly decadent experience."),
    ("Juicy", "Remarkably juicy."),
    ("Crispy", "Perfectly crispy texture."),
    ("Tangy", "Features a delightful tang."),
    ("Cheesy", "Packed with cheesy goodness."),
    ("Fresh", "Highlights fresh ingredients."),
    ("Herbal", "Infused with fragrant herbs."),
];

pub fn describe_taste(tag: &str) -> Option<&'static str> {
    TASTE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, description)| *description)
}
