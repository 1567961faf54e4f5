//! Static mock price tables.
//!
//! Stand-in data until real chain feeds exist. Prices are in shekels.

use super::catalog::ProductRecord;

pub(crate) const SHUFERSAL_NOTE: &str =
    "This is MOCK data with realistic Israeli supermarket prices (2025). Replace with real API call.";
pub(crate) const RAMI_LEVY_NOTE: &str =
    "This is MOCK data with realistic Rami Levy prices (typically 10-15% cheaper). Replace with real API call.";
pub(crate) const YOHANANOF_NOTE: &str =
    "This is MOCK data with realistic Yohananof prices (premium positioning, ~5-10% higher). Replace with real API call.";

pub(crate) const SHUFERSAL_PRICES: &[(&str, f64)] = &[
    // produce
    ("גזר", 7.90),
    ("מלפפונים", 6.90),
    ("עגבניות", 8.90),
    ("חסה", 5.90),
    ("בצל", 4.90),
    ("תפוחי אדמה", 5.90),
    ("תפוחים", 9.90),
    ("בננות", 8.90),
    ("אבוקדו", 14.90),
    // dairy
    ("חלב", 5.90),
    ("גבינה צהובה", 24.90),
    ("גבינה לבנה", 6.90),
    ("קוטג'", 7.90),
    ("יוגורט", 4.50),
    ("חמאה", 14.90),
    ("ביצים", 12.90),
    // bakery
    ("לחם", 6.50),
    ("חלה", 8.90),
    ("פיתות", 6.90),
    // meat and fish
    ("חזה עוף", 34.90),
    ("שניצל", 42.90),
    ("בשר טחון", 38.90),
    ("סלמון", 59.90),
    ("טונה", 12.90),
    // pantry
    ("אורז", 8.90),
    ("פסטה", 6.90),
    ("קמח", 5.90),
    ("סוכר", 4.90),
    ("שמן זית", 24.90),
    ("טחינה", 12.90),
    ("קפה", 24.90),
    // drinks
    ("מים", 3.90),
    ("קוקה קולה 1.5L", 7.90),
    ("פפסי 1.5L", 7.50),
    ("בירה גולדסטאר", 8.50),
    ("יין ברקן אדום", 45.00),
    // snacks
    ("במבה", 4.90),
    ("ביסלי", 5.90),
    ("שוקולד מילקה", 8.90),
    // household
    ("נייר טואלט", 24.90),
    ("סבון כלים פיירי", 12.90),
    ("אבקת כביסה אריאל", 38.90),
    // baby
    ("חיתולים", 54.90),
    ("חיתולי האגיס 4-9 ק\"ג", 59.90),
    ("מטליות לחות", 12.90),
    // frozen
    ("ירקות קפואים", 12.90),
    ("פיצה קפואה", 24.90),
];

pub(crate) const RAMI_LEVY_PRICES: &[(&str, f64)] = &[
    ("גזר", 6.90),
    ("מלפפונים", 5.90),
    ("עגבניות", 7.90),
    ("חסה", 4.90),
    ("בצל", 3.90),
    ("תפוחי אדמה", 4.90),
    ("תפוחים", 8.90),
    ("בננות", 7.90),
    ("אבוקדו", 12.90),
    ("חלב", 5.50),
    ("גבינה צהובה", 22.90),
    ("גבינה לבנה", 5.90),
    ("קוטג'", 6.90),
    ("יוגורט", 3.90),
    ("חמאה", 13.90),
    ("ביצים", 11.90),
    ("לחם", 5.90),
    ("חלה", 7.90),
    ("פיתות", 5.90),
    ("חזה עוף", 32.90),
    ("שניצל", 39.90),
    ("בשר טחון", 35.90),
    ("סלמון", 54.90),
    ("טונה", 10.90),
    ("אורז", 7.90),
    ("פסטה", 5.90),
    ("קמח", 4.90),
    ("סוכר", 3.90),
    ("שמן זית", 22.90),
    ("טחינה", 10.90),
    ("קפה", 22.90),
    ("מים", 2.90),
    ("קוקה קולה 1.5L", 6.90),
    ("פפסי 1.5L", 6.50),
    ("בירה גולדסטאר", 7.50),
    ("יין ברקן", 42.00),
    ("במבה", 3.90),
    ("ביסלי", 4.90),
    ("שוקולד מילקה", 7.90),
    ("נייר טואלט", 22.90),
    ("סבון כלים פיירי", 10.90),
    ("אבקת כביסה אריאל", 34.90),
    ("חיתולים", 49.90),
    ("חיתולי האגיס 4-9 ק\"ג", 54.90),
    ("מטליות לחות", 10.90),
    ("ירקות קפואים", 10.90),
    ("פיצה קפואה", 22.90),
];

pub(crate) const YOHANANOF_PRICES: &[(&str, f64)] = &[
    ("גזר", 8.50),
    ("מלפפונים", 7.50),
    ("עגבניות", 9.50),
    ("חסה", 6.50),
    ("בצל", 5.50),
    ("תפוחי אדמה", 6.50),
    ("תפוחים", 10.50),
    ("בננות", 9.50),
    ("אבוקדו", 15.90),
    ("חלב", 6.20),
    ("גבינה צהובה", 26.90),
    ("גבינה לבנה", 7.50),
    ("קוטג'", 8.50),
    ("יוגורט", 4.90),
    ("חמאה", 15.90),
    ("ביצים", 13.50),
    ("לחם", 7.00),
    ("חלה", 9.50),
    ("פיתות", 7.50),
    ("חזה עוף", 36.90),
    ("שניצל", 44.90),
    ("בשר טחון", 39.90),
    ("סלמון", 64.90),
    ("טונה", 13.50),
    ("אורז", 9.50),
    ("פסטה", 7.50),
    ("קמח", 6.50),
    ("סוכר", 5.50),
    ("שמן זית", 26.90),
    ("טחינה", 13.50),
    ("קפה", 26.90),
    ("קפה עלית", 29.90),
    ("מים", 4.50),
    ("קוקה קולה 1.5L", 8.50),
    ("פפסי 1.5L", 7.90),
    ("בירה גולדסטאר", 9.50),
    ("יין רקנאטי", 58.00),
    ("במבה", 5.50),
    ("ביסלי", 6.50),
    ("שוקולד מילקה", 9.50),
    ("נייר טואלט", 26.90),
    ("סבון כלים פיירי", 13.50),
    ("אבקת כביסה אריאל", 39.90),
    ("חיתולים", 59.90),
    ("חיתולי האגיס 4-9 ק\"ג", 62.90),
    ("מטליות לחות", 13.50),
    ("ירקות קפואים", 13.50),
    ("פיצה קפואה", 26.90),
];

pub(crate) const PRODUCTS: &[ProductRecord] = &[
    ProductRecord { barcode: "7290000123456", name: "חיתולי האגיס 4-9 ק\"ג", brand: "האגיס", icon: "👶", unit: "אריזה", base_price: 59.90 },
    ProductRecord { barcode: "7290001234567", name: "חיתולי כיפי מידה 4", brand: "כיפי", icon: "👶", unit: "אריזה", base_price: 52.90 },
    ProductRecord { barcode: "7290003456789", name: "קוקה קולה 1.5L", brand: "קוקה קולה", icon: "🥤", unit: "בקבוק", base_price: 7.90 },
    ProductRecord { barcode: "7290004567890", name: "פפסי 1.5L", brand: "פפסי", icon: "🥤", unit: "בקבוק", base_price: 7.50 },
    ProductRecord { barcode: "7290005678901", name: "מים נביעות הגולן 1.5L", brand: "נביעות הגולן", icon: "💧", unit: "בקבוק", base_price: 4.90 },
    ProductRecord { barcode: "7290007890123", name: "חלב תנובה 3% 1L", brand: "תנובה", icon: "🥛", unit: "ליטר", base_price: 6.90 },
    ProductRecord { barcode: "7290008901234", name: "גבינה צהובה עמק 200 גרם", brand: "עמק", icon: "🧀", unit: "אריזה", base_price: 16.90 },
    ProductRecord { barcode: "7290015039246", name: "נתיחי טונה בהירים בשמן צמחי", brand: "", icon: "🐟", unit: "קופסא", base_price: 9.90 },
    ProductRecord { barcode: "7290010123456", name: "לחם בריאות אנג׳ל", brand: "אנג׳ל", icon: "🍞", unit: "יח׳", base_price: 6.50 },
    ProductRecord { barcode: "7290012345678", name: "במבה אסם 80 גרם", brand: "אסם", icon: "🥜", unit: "שקית", base_price: 5.50 },
    ProductRecord { barcode: "7290013456789", name: "ביסלי גריל 70 גרם", brand: "שטראוס", icon: "🥔", unit: "שקית", base_price: 5.90 },
    ProductRecord { barcode: "7290015678901", name: "יין ברקן קלאסיק אדום", brand: "ברקן", icon: "🍷", unit: "בקבוק", base_price: 45.00 },
    ProductRecord { barcode: "7290017890123", name: "נייר טואלט סופט 32 גלילים", brand: "סופט", icon: "🧻", unit: "אריזה", base_price: 28.90 },
    ProductRecord { barcode: "7290019012345", name: "סבון כלים פיירי 1.5L", brand: "פיירי", icon: "🧴", unit: "בקבוק", base_price: 12.90 },
];
