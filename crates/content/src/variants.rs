//! Built-in site variants
//!
//! The two sites share every component and differ only in the content
//! returned here.

use crate::site::{
    AppointmentContent, Brand, CallToAction, Contact, HomeContent, Icon, Image, SectionHeading,
    Service, SiteContent, SocialLink, SocialNetwork, Testimonial, TestimonialsContent, Theme,
    TreatmentsContent,
};
use clinic_core::SiteError;
use std::fmt;
use std::str::FromStr;

/// A built-in content set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// General medical clinic
    #[default]
    Clinic,
    /// Skin and aesthetics studio
    Aesthetics,
}

impl Variant {
    /// Every variant
    pub const ALL: [Variant; 2] = [Variant::Clinic, Variant::Aesthetics];

    /// Name used on the command line and in `CLINIC_SITE_VARIANT`
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Clinic => "clinic",
            Variant::Aesthetics => "aesthetics",
        }
    }

    /// Build the content for this variant
    pub fn content(&self) -> SiteContent {
        match self {
            Variant::Clinic => clinic(),
            Variant::Aesthetics => aesthetics(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| SiteError::UnknownVariant(s.to_string()))
    }
}

fn service(icon: Icon, title: &str, summary: &str, description: &str) -> Service {
    Service {
        icon,
        title: title.to_string(),
        summary: summary.to_string(),
        description: description.to_string(),
    }
}

fn testimonial(quote: &str, author: &str, rating: u8) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        rating,
    }
}

fn social_defaults() -> Vec<SocialLink> {
    [
        SocialNetwork::Facebook,
        SocialNetwork::Twitter,
        SocialNetwork::Linkedin,
    ]
    .into_iter()
    .map(|network| SocialLink {
        network,
        url: "#".to_string(),
    })
    .collect()
}

// ============================================================================
// Clinic
// ============================================================================

fn clinic() -> SiteContent {
    SiteContent {
        brand: Brand {
            name: "Shree Sai Clinic".to_string(),
            blurb: "Providing compassionate and comprehensive healthcare for you and your family."
                .to_string(),
            logo: Icon::PlusSquare,
        },
        theme: Theme::default(),
        contact: Contact {
            phone: "(123) 456-7890".to_string(),
            email: "info@careclinic.com".to_string(),
            address: "123 Health St, Medtown, USA".to_string(),
        },
        social: social_defaults(),
        home: HomeContent {
            hero_title: vec!["Your Health,".to_string(), "Our Priority.".to_string()],
            hero_body: "Welcome to Shree Sai Clinic, where our experienced team is dedicated to \
                        providing you with the highest quality medical care in a warm and \
                        welcoming environment."
                .to_string(),
            hero_cta: "Book an Appointment".to_string(),
            hero_image: Image {
                src: "https://placehold.co/600x400/3B82F6/FFFFFF?text=Your+Photos+Here"
                    .to_string(),
                alt: "Friendly doctor".to_string(),
            },
            services_heading: SectionHeading::new(
                "Our Treatments",
                "We offer a wide range of services to meet your health needs. From routine \
                 check-ups to specialized care.",
            ),
            featured_services: 3,
            see_all_services: "See All Treatments →".to_string(),
            testimonials_heading: SectionHeading::new(
                "What Our Patients Say",
                "Your trust is our most valued asset. See what our patients have to say about \
                 their experience.",
            ),
            featured_testimonials: 2,
            read_more_testimonials: "Read More Testimonials →".to_string(),
            call_to_action: CallToAction {
                title: "Ready to Take Control of Your Health?".to_string(),
                body: "Our team is here to support you. Schedule your appointment today and take \
                       the first step towards a healthier tomorrow."
                    .to_string(),
                button: "Book Appointment Now".to_string(),
            },
        },
        treatments: TreatmentsContent {
            heading: SectionHeading::new(
                "Our Medical Treatments",
                "We provide a full spectrum of services to ensure you and your family receive \
                 the best possible care.",
            ),
            services: vec![
                service(
                    Icon::Stethoscope,
                    "General Checkup",
                    "Comprehensive physical exams and preventive care to keep you healthy.",
                    "Comprehensive physical exams, health screenings, and preventive care to \
                     keep you healthy year-round.",
                ),
                service(
                    Icon::Heart,
                    "Cardiology",
                    "Expert care for your heart, including diagnosis, treatment, and monitoring.",
                    "Expert care for your heart, including diagnosis, treatment, and monitoring \
                     of cardiovascular conditions.",
                ),
                service(
                    Icon::User,
                    "Pediatrics",
                    "Compassionate care for infants, children, and adolescents.",
                    "Compassionate care for infants, children, and adolescents, from wellness \
                     checks to sick visits.",
                ),
                service(
                    Icon::Bone,
                    "Orthopedics",
                    "Treatment for bone, joint, and muscle issues.",
                    "Specialized treatment for bone, joint, and muscle issues, helping you \
                     regain mobility and live pain-free.",
                ),
                service(
                    Icon::Brain,
                    "Neurology",
                    "Care for disorders of the nervous system.",
                    "Advanced care for disorders of the nervous system, including the brain, \
                     spinal cord, and nerves.",
                ),
                service(
                    Icon::MessageSquare,
                    "Mental Health",
                    "Confidential counseling and therapy services.",
                    "Confidential and supportive counseling and therapy services for your \
                     mental and emotional well-being.",
                ),
            ],
        },
        testimonials: TestimonialsContent {
            heading: SectionHeading::new(
                "Patient Stories",
                "Hearing from our patients is our greatest reward. We are proud to have earned \
                 their trust.",
            ),
            items: vec![
                testimonial(
                    "The most caring and professional staff I have ever encountered. Dr. Smith \
                     took the time to listen and explained everything clearly.",
                    "Sarah J.",
                    5,
                ),
                testimonial(
                    "Booking an appointment was seamless, and I was seen right on time. A \
                     fantastic experience from start to finish.",
                    "Michael B.",
                    5,
                ),
                testimonial(
                    "I was nervous about my procedure, but the entire team made me feel \
                     comfortable and safe. Highly recommend.",
                    "David L.",
                    5,
                ),
                testimonial(
                    "Dr. Chen is a wonderful pediatrician. She is so patient with my children \
                     and always addresses all my concerns.",
                    "Emily K.",
                    5,
                ),
                testimonial(
                    "Finally, a clinic that values your time. Efficient, clean, and everyone is \
                     incredibly friendly.",
                    "Robert P.",
                    4,
                ),
                testimonial(
                    "The front desk staff are always so helpful and welcoming. It makes a big \
                     difference. Thank you!",
                    "Maria G.",
                    5,
                ),
            ],
        },
        appointment: AppointmentContent {
            heading: SectionHeading::new(
                "Book Your Appointment",
                "We look forward to seeing you. Please fill out the form below to request an \
                 appointment.",
            ),
            submit_label: "Submit Request".to_string(),
            confirmation_title: "Thank You!".to_string(),
            confirmation_body: "Your appointment request has been submitted. Our team will \
                                contact you shortly to confirm your date and time."
                .to_string(),
            retry_label: "Book Another".to_string(),
        },
    }
}

// ============================================================================
// Aesthetics
// ============================================================================

fn aesthetics() -> SiteContent {
    SiteContent {
        brand: Brand {
            name: "Radiance Skin & Aesthetics".to_string(),
            blurb: "Personalised skin care and aesthetic treatments in a calm, welcoming studio."
                .to_string(),
            logo: Icon::Sparkles,
        },
        theme: Theme {
            primary: "#db2777".to_string(),
            primary_hover: "#be185d".to_string(),
            primary_soft: "#fdf2f8".to_string(),
            surface_muted: "#fafaf9".to_string(),
            heading: "#292524".to_string(),
            body: "#57534e".to_string(),
            star: "#f59e0b".to_string(),
            star_empty: "#d6d3d1".to_string(),
            success: "#059669".to_string(),
            footer_background: "#292524".to_string(),
        },
        contact: Contact {
            phone: "(123) 555-0148".to_string(),
            email: "hello@radianceaesthetics.com".to_string(),
            address: "48 Bloom Avenue, Medtown, USA".to_string(),
        },
        social: vec![
            SocialLink {
                network: SocialNetwork::Instagram,
                url: "#".to_string(),
            },
            SocialLink {
                network: SocialNetwork::Facebook,
                url: "#".to_string(),
            },
        ],
        home: HomeContent {
            hero_title: vec!["Healthy Skin,".to_string(), "Natural Confidence.".to_string()],
            hero_body: "Our qualified practitioners design every treatment around your skin, \
                        your goals and your comfort."
                .to_string(),
            hero_cta: "Book a Consultation".to_string(),
            hero_image: Image {
                src: "https://placehold.co/600x400/DB2777/FFFFFF?text=Your+Photos+Here"
                    .to_string(),
                alt: "Aesthetic practitioner with a client".to_string(),
            },
            services_heading: SectionHeading::new(
                "Our Treatments",
                "From a relaxing facial to advanced skin rejuvenation, there is a treatment for \
                 every skin.",
            ),
            featured_services: 3,
            see_all_services: "See All Treatments →".to_string(),
            testimonials_heading: SectionHeading::new(
                "What Our Clients Say",
                "Real words from the people who trust us with their skin.",
            ),
            featured_testimonials: 2,
            read_more_testimonials: "Read More Reviews →".to_string(),
            call_to_action: CallToAction {
                title: "Ready for Your Glow-Up?".to_string(),
                body: "Start with a free skin consultation and leave with a plan made for you."
                    .to_string(),
                button: "Book a Consultation".to_string(),
            },
        },
        treatments: TreatmentsContent {
            heading: SectionHeading::new(
                "Aesthetic Treatments",
                "Every treatment begins with a consultation so we can tailor it to your skin.",
            ),
            services: vec![
                service(
                    Icon::Sparkles,
                    "Signature Facial",
                    "A deep-cleansing facial tailored to your skin type.",
                    "A deep-cleansing, hydrating facial tailored to your skin type, finished \
                     with a soothing massage.",
                ),
                service(
                    Icon::Droplet,
                    "Hydration Therapy",
                    "Intensive hydration for dull or dry skin.",
                    "Intensive serum infusion that restores moisture and leaves dull or dry skin \
                     plump and luminous.",
                ),
                service(
                    Icon::Sun,
                    "Pigmentation Care",
                    "Targeted care for sun spots and uneven tone.",
                    "Targeted peels and light treatments that fade sun spots and even out skin \
                     tone over a short course.",
                ),
                service(
                    Icon::Leaf,
                    "Acne Clinic",
                    "Clinical treatment plans for breakouts and scarring.",
                    "Clinical treatment plans for active breakouts and scarring, with home-care \
                     guidance between visits.",
                ),
                service(
                    Icon::Heart,
                    "Anti-Ageing",
                    "Gentle treatments that soften fine lines.",
                    "Gentle, non-surgical treatments that soften fine lines and support the \
                     skin's natural firmness.",
                ),
            ],
        },
        testimonials: TestimonialsContent {
            heading: SectionHeading::new(
                "Client Stories",
                "We love hearing how our clients feel after their treatments.",
            ),
            items: vec![
                testimonial(
                    "My skin has never looked this good. The team explained every step and I \
                     felt completely at ease.",
                    "Priya S.",
                    5,
                ),
                testimonial(
                    "The hydration therapy made a visible difference after a single session.",
                    "Laura M.",
                    5,
                ),
                testimonial(
                    "Professional, friendly and honest about what would actually work for me.",
                    "Anita R.",
                    5,
                ),
                testimonial(
                    "Beautiful studio and lovely staff. Booking was quick and easy.",
                    "Chloe T.",
                    4,
                ),
            ],
        },
        appointment: AppointmentContent {
            heading: SectionHeading::new(
                "Book Your Consultation",
                "Tell us a little about yourself and we will get back to you to arrange a time.",
            ),
            submit_label: "Request Consultation".to_string(),
            confirmation_title: "Thank You!".to_string(),
            confirmation_body: "Your consultation request has been received. We will contact you \
                                shortly to confirm your appointment."
                .to_string(),
            retry_label: "Book Another".to_string(),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
