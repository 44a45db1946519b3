//! # chatbot
//!
//! Canned-reply responder for the website chat widget. Matches the inbound
//! message (lowercased) against an ordered list of keyword groups; the first
//! group with any matching keyword wins, otherwise the fallback reply is
//! returned. Pure and stateless: no memory of prior turns.

/// Reply when the message looks like a greeting.
pub const GREETING_REPLY: &str = "Hello! Welcome to our digital skills training centre. \
    How can I help you today? You can ask about our courses, booking a session, \
    pricing, or where to find us.";

/// Reply listing what the centre teaches.
pub const SERVICES_REPLY: &str = "We offer free and low-cost training in basic computer \
    skills, internet and email, office applications, and digital safety. \
    Sessions run on weekdays and Saturday mornings.";

/// Reply explaining how to book a session.
pub const BOOKING_REPLY: &str = "You can book a session through the booking form on our \
    website. Pick a service, leave your name, email and phone number, and our team \
    will confirm your slot within one working day.";

/// Reply about pricing.
pub const PRICING_REPLY: &str = "Most of our beginner courses are completely free. \
    Advanced workshops carry a small fee to cover materials; the booking form shows \
    the fee for each service before you submit.";

/// Reply with directions to the centre.
pub const LOCATION_REPLY: &str = "Our training centre is at the community hall on \
    Main Street, open Monday to Saturday, 8am to 5pm. The contact page has a map \
    and minibus directions.";

/// Reply with contact details.
pub const CONTACT_REPLY: &str = "You can reach us through the contact form on the \
    website, by email at info@example.org, or by phone on +263 700 000 000 during \
    opening hours.";

/// Reply describing the organization.
pub const ABOUT_REPLY: &str = "We are a nonprofit that helps people in our community \
    gain the digital skills they need for work and everyday life. All our trainers \
    are volunteers.";

/// Catch-all reply when no keyword group matches.
pub const FALLBACK_REPLY: &str = "Thanks for your message! I can help with questions \
    about our courses, booking a session, pricing, our location, or how to contact \
    the team. For anything else, please use the contact form and we will get back \
    to you.";

struct KeywordGroup {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Check order is the tie-break rule: the first group with a match wins.
const GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        keywords: &["hello", "hi", "hey", "good morning", "good afternoon"],
        reply: GREETING_REPLY,
    },
    KeywordGroup {
        keywords: &["service", "course", "class", "training", "learn", "program"],
        reply: SERVICES_REPLY,
    },
    KeywordGroup {
        keywords: &["book", "appointment", "session", "schedule", "reserve"],
        reply: BOOKING_REPLY,
    },
    KeywordGroup {
        keywords: &["price", "cost", "fee", "how much", "pay"],
        reply: PRICING_REPLY,
    },
    KeywordGroup {
        keywords: &["location", "where", "address", "direction", "find you"],
        reply: LOCATION_REPLY,
    },
    KeywordGroup {
        keywords: &["contact", "phone", "email", "call", "reach"],
        reply: CONTACT_REPLY,
    },
    KeywordGroup {
        keywords: &["about", "who are you", "mission", "nonprofit", "organisation"],
        reply: ABOUT_REPLY,
    },
];

/// Maps a free-text inbound message to a canned reply.
pub fn generate_bot_response(text: &str) -> &'static str {
    let text = text.to_lowercase();
    GROUPS
        .iter()
        .find(|group| group.keywords.iter().any(|k| text.contains(k)))
        .map(|group| group.reply)
        .unwrap_or(FALLBACK_REPLY)
}
