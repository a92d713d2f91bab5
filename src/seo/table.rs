//! Static SEO table: per-page metadata for both languages, used whenever the
//! CMS has nothing better to offer. Process-wide constant data.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::locale::Locale;
use crate::seo::SeoEntry;

pub struct LocalizedSeo {
    pub en: SeoEntry,
    pub ar: SeoEntry,
}

impl LocalizedSeo {
    pub fn for_locale(&self, locale: Locale) -> &SeoEntry {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

fn entry(title: &str, description: &str, keywords: &str, og_image: &str) -> SeoEntry {
    SeoEntry {
        title: title.to_string(),
        description: description.to_string(),
        keywords: keywords.to_string(),
        og_image: Some(og_image.to_string()),
        og_image_alt: None,
    }
}

static DEFAULT_SEO: Lazy<LocalizedSeo> = Lazy::new(|| LocalizedSeo {
    en: entry(
        "QuickAir - Travel & Adventure Experts",
        "Discover amazing travel experiences with QuickAir. Book tours, explore destinations, and create unforgettable memories.",
        "travel, tours, adventures, destinations, vacation, booking",
        "/img/seo/default-og.jpg",
    ),
    ar: entry(
        "QuickAir - خبراء السفر والمغامرات",
        "اكتشف تجارب سفر مذهلة مع QuickAir. احجز الجولات، استكشف الوجهات، واصنع ذكريات لا تُنسى.",
        "سفر, جولات, مغامرات, وجهات, عطلة, حجز",
        "/img/seo/default-og-ar.jpg",
    ),
});

static SEO_TABLE: Lazy<HashMap<&'static str, LocalizedSeo>> = Lazy::new(|| {
    HashMap::from([
        (
            "home",
            LocalizedSeo {
                en: entry(
                    "QuickAir - Your Adventure Travel Experts",
                    "Discover 300,000+ unforgettable travel experiences worldwide. Book your next adventure with QuickAir, your trusted travel experts.",
                    "travel, tours, adventures, destinations, vacation, holiday, booking",
                    "/img/seo/home-og.jpg",
                ),
                ar: entry(
                    "QuickAir - خبراء السفر والمغامرات",
                    "اكتشف أكثر من 300,000 تجربة سفر لا تُنسى حول العالم. احجز مغامرتك القادمة مع QuickAir، خبراء السفر الموثوق بهم.",
                    "سفر, جولات, مغامرات, وجهات, عطلة, حجز",
                    "/img/seo/home-og-ar.jpg",
                ),
            },
        ),
        (
            "tour-list",
            LocalizedSeo {
                en: entry(
                    "Explore Amazing Tours & Destinations | QuickAir",
                    "Browse through our curated collection of tours and destinations. Find the perfect adventure for your next trip.",
                    "tours, destinations, travel packages, adventure tours, city tours",
                    "/img/seo/tours-og.jpg",
                ),
                ar: entry(
                    "استكشف الجولات والوجهات المذهلة | QuickAir",
                    "تصفح مجموعتنا المختارة من الجولات والوجهات. اعثر على المغامرة المثالية لرحلتك القادمة.",
                    "جولات, وجهات, باقات سفر, جولات مغامرات, جولات المدن",
                    "/img/seo/tours-og-ar.jpg",
                ),
            },
        ),
        (
            "tour-single",
            LocalizedSeo {
                en: entry(
                    "Tour Details | QuickAir",
                    "Explore detailed information about this amazing tour experience. Check availability, pricing, and book your adventure today.",
                    "tour details, book tour, tour information, travel experience",
                    "/img/seo/tour-detail-og.jpg",
                ),
                ar: entry(
                    "تفاصيل الجولة | QuickAir",
                    "استكشف معلومات تفصيلية حول تجربة الجولة المذهلة هذه. تحقق من التوفر والأسعار واحجز مغامرتك اليوم.",
                    "تفاصيل الجولة, حجز جولة, معلومات الجولة, تجربة السفر",
                    "/img/seo/tour-detail-og-ar.jpg",
                ),
            },
        ),
        (
            "destinations",
            LocalizedSeo {
                en: entry(
                    "Travel Destinations Around the World | QuickAir",
                    "Discover breathtaking destinations across the globe. Find your perfect getaway from our extensive collection of travel locations.",
                    "travel destinations, world destinations, vacation spots, tourist destinations",
                    "/img/seo/destinations-og.jpg",
                ),
                ar: entry(
                    "وجهات السفر حول العالم | QuickAir",
                    "اكتشف وجهات خلابة حول العالم. اعثر على ملاذك المثالي من مجموعتنا الواسعة من أماكن السفر.",
                    "وجهات السفر, وجهات العالم, أماكن العطلات, الوجهات السياحية",
                    "/img/seo/destinations-og-ar.jpg",
                ),
            },
        ),
        (
            "about",
            LocalizedSeo {
                en: entry(
                    "About QuickAir - Your Trusted Travel Partner",
                    "Learn about QuickAir's mission to provide exceptional travel experiences. Discover why thousands of travelers trust us for their adventures.",
                    "about QuickAir, travel company, about us, travel experts",
                    "/img/seo/about-og.jpg",
                ),
                ar: entry(
                    "عن QuickAir - شريك السفر الموثوق",
                    "تعرف على مهمة QuickAir لتوفير تجارب سفر استثنائية. اكتشف لماذا يثق الآلاف من المسافرين بنا في مغامراتهم.",
                    "عن QuickAir, شركة سفر, من نحن, خبراء السفر",
                    "/img/seo/about-og-ar.jpg",
                ),
            },
        ),
        (
            "contact",
            LocalizedSeo {
                en: entry(
                    "Contact Us - QuickAir Travel Support",
                    "Get in touch with QuickAir's travel experts. We're here to help you plan your perfect adventure.",
                    "contact QuickAir, travel support, customer service, help",
                    "/img/seo/contact-og.jpg",
                ),
                ar: entry(
                    "اتصل بنا - دعم QuickAir للسفر",
                    "تواصل مع خبراء السفر في QuickAir. نحن هنا لمساعدتك في التخطيط لمغامرتك المثالية.",
                    "اتصل بـ QuickAir, دعم السفر, خدمة العملاء, مساعدة",
                    "/img/seo/contact-og-ar.jpg",
                ),
            },
        ),
        (
            "blog",
            LocalizedSeo {
                en: entry(
                    "Travel Blog & Tips | QuickAir",
                    "Read the latest travel articles, tips, and destination guides from QuickAir's travel experts.",
                    "travel blog, travel tips, travel guides, destination guides",
                    "/img/seo/blog-og.jpg",
                ),
                ar: entry(
                    "مدونة ونصائح السفر | QuickAir",
                    "اقرأ أحدث المقالات السياحية والنصائح وأدلة الوجهات من خبراء السفر في QuickAir.",
                    "مدونة السفر, نصائح السفر, أدلة السفر, أدلة الوجهات",
                    "/img/seo/blog-og-ar.jpg",
                ),
            },
        ),
        (
            "help-center",
            LocalizedSeo {
                en: entry(
                    "Help Center - QuickAir Travel Support",
                    "Find answers to frequently asked questions and get help with your travel bookings.",
                    "help center, FAQ, support, travel help, booking help",
                    "/img/seo/help-og.jpg",
                ),
                ar: entry(
                    "مركز المساعدة - دعم QuickAir للسفر",
                    "اعثر على إجابات للأسئلة المتكررة واحصل على المساعدة في حجوزات السفر الخاصة بك.",
                    "مركز المساعدة, الأسئلة الشائعة, الدعم, مساعدة السفر, مساعدة الحجز",
                    "/img/seo/help-og-ar.jpg",
                ),
            },
        ),
        (
            "dashboard",
            LocalizedSeo {
                en: entry(
                    "My Dashboard | QuickAir",
                    "Manage your bookings, favorites, and profile on QuickAir.",
                    "dashboard, my bookings, my account, user profile",
                    "/img/seo/dashboard-og.jpg",
                ),
                ar: entry(
                    "لوحة التحكم | QuickAir",
                    "إدارة حجوزاتك ومفضلاتك وملفك الشخصي على QuickAir.",
                    "لوحة التحكم, حجوزاتي, حسابي, الملف الشخصي",
                    "/img/seo/dashboard-og-ar.jpg",
                ),
            },
        ),
    ])
});

/// Look up a known page's metadata. `None` for unknown page keys.
pub fn page_seo(page: &str, locale: Locale) -> Option<&'static SeoEntry> {
    SEO_TABLE.get(page).map(|seo| seo.for_locale(locale))
}

/// Site-wide default metadata.
pub fn default_seo(locale: Locale) -> &'static SeoEntry {
    DEFAULT_SEO.for_locale(locale)
}

/// Fallback chain: the named page's entry if known, the default otherwise.
pub fn fallback_seo(page: Option<&str>, locale: Locale) -> &'static SeoEntry {
    page.and_then(|p| page_seo(p, locale))
        .unwrap_or_else(|| default_seo(locale))
}

/// Page keys with a static entry, in no particular order.
pub fn known_pages() -> impl Iterator<Item = &'static str> {
    SEO_TABLE.keys().copied()
}
