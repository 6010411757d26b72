/// Categories suggested to the user. Categories are free text; this list is only advisory and
/// nothing is validated against it.
pub const SUGGESTED_CATEGORIES: [&str; 9] = [
    "food",
    "transport",
    "rent",
    "utilities",
    "entertainment",
    "health",
    "education",
    "clothes",
    "misc",
];
