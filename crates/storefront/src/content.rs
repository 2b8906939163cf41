//! Fixed storefront copy.
//!
//! Copy that is not managed in Shopify: brand name, hero banner, and the
//! FAQ entries rendered as an accordion on the FAQ page.

/// Brand name used in page titles.
pub const BRAND: &str = "LunaDesire";

/// Handle of the CMS page rendered as the FAQ accordion.
pub const FAQ_PAGE_HANDLE: &str = "frequently-asked-questions";

/// Handle of the CMS page shown with a background image.
pub const ABOUT_PAGE_HANDLE: &str = "about";

/// Background image for the about page hero.
pub const ABOUT_BACKGROUND: &str = "/static/images/about.png";

/// Title for a page, e.g. `LunaDesire | About`.
#[must_use]
pub fn page_title(title: &str) -> String {
    format!("{BRAND} | {title}")
}

// =============================================================================
// Hero
// =============================================================================

/// A call-to-action link.
#[derive(Debug, Clone, Copy)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

/// Home page hero banner.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    /// Headline text before the accent word.
    pub headline: &'static str,
    /// Highlighted last word of the headline.
    pub accent: &'static str,
    pub tagline: &'static str,
    pub primary: CallToAction,
    pub secondary: CallToAction,
    pub promo_headline: &'static str,
    pub promo_caption: &'static str,
    pub promo_code: &'static str,
    pub background: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Discover Your",
    accent: "Desire",
    tagline: "Explore our premium collection of intimate products designed for your \
              pleasure and satisfaction. High-quality materials, discreet shipping, and \
              exceptional customer service.",
    primary: CallToAction {
        label: "Shop Now",
        href: "/collections/all",
    },
    secondary: CallToAction {
        label: "View Collection",
        href: "/collections/all",
    },
    promo_headline: "15% DISCOUNT",
    promo_caption: "With Promo Code",
    promo_code: "WELCOME15",
    background: "/static/images/hero-background.png",
};

/// Heading above the home page product grid.
pub const PRODUCTS_HEADING: &str = "Discover Our Products";

// =============================================================================
// FAQ
// =============================================================================

/// One question and answer.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    /// Stable anchor id.
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 8] = [
    FaqEntry {
        id: "shipping-discreet",
        question: "Will my package be shipped to me discreetly?",
        answer: "Yes, absolutely. All orders are shipped in plain, unmarked packaging with no \
                 indication of the contents. Your privacy and discretion are our top priorities.",
    },
    FaqEntry {
        id: "shipping-partners",
        question: "Who do you use for shipping?",
        answer: "We use trusted shipping partners including FedEx, UPS, and USPS to ensure \
                 reliable and discreet delivery of your orders.",
    },
    FaqEntry {
        id: "shipping-time",
        question: "How long will it take for my product to arrive?",
        answer: "Standard shipping takes 3-5 business days, while express shipping takes 1-2 \
                 business days. We also offer same-day delivery in select areas.",
    },
    FaqEntry {
        id: "business-hours",
        question: "What hours are you open?",
        answer: "Our customer service is available 24/7 online. For phone support, we're \
                 available Monday through Friday from 9 AM to 6 PM EST.",
    },
    FaqEntry {
        id: "return-policy",
        question: "What is your return policy?",
        answer: "We offer a 30-day return policy for unused products in original packaging. \
                 Please contact our customer service team for return instructions.",
    },
    FaqEntry {
        id: "credit-cards",
        question: "What credit cards are accepted?",
        answer: "We accept all major credit cards including Visa, MasterCard, American Express, \
                 and Discover. All transactions are encrypted and secure.",
    },
    FaqEntry {
        id: "credit-card-storage",
        question: "Do you store credit card information on your servers?",
        answer: "No, we do not store credit card information on our servers. All payment \
                 processing is handled by secure, PCI-compliant third-party processors.",
    },
    FaqEntry {
        id: "phone-orders",
        question: "Do you accept phone orders?",
        answer: "No, we do not accept phone orders. All orders must be placed through our secure \
                 online store to ensure proper processing and payment security.",
    },
];
