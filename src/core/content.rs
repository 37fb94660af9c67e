//! Built-in page content for HTL Spengergasse

use crate::core::data::{
    Catalog, Department, Hero, RecommendationReason, SectionCopy, Segment, Source, SourceId,
};
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(
        hero(),
        section_copy(),
        sources(),
        departments(),
        recommendation_reasons(),
        exploration_tips(),
    )
});

/// The process-wide catalog, built on first access
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

fn hero() -> Hero {
    Hero {
        tag: "Spengergasse guidance".to_string(),
        heading: "Best department for a versatile “good at everything” student".to_string(),
        lead: "After reviewing the main HTL Spengergasse departments, the Informatik track stands out as the best launchpad for a casual all-rounder who wants to stay open to many careers, while other departments offer strong niche alternatives.".to_string(),
    }
}

fn section_copy() -> SectionCopy {
    SectionCopy {
        recommendation_badge: "Top match".to_string(),
        reasons_heading: "Why it fits an all-rounder".to_string(),
        recommended_flag: "Recommended".to_string(),
        comparison_heading: "How other departments compare".to_string(),
        comparison_intro: "Each pathway has a distinct flavour. Use this overview to see which strengths energise you most and where the workloads differ.".to_string(),
        tips_heading: "Make the decision with confidence".to_string(),
        tips_intro: "Pair the academic facts with personal experiments so you can feel which environment matches your motivation and rhythm.".to_string(),
        sources_heading: "Sources".to_string(),
    }
}

fn source(id: SourceId, title: &str, url: &str, summary: &str) -> Source {
    Source {
        id,
        title: title.to_string(),
        url: url.to_string(),
        summary: summary.to_string(),
    }
}

fn sources() -> Vec<Source> {
    vec![
        source(
            SourceId::Informatik,
            "HTL Spengergasse – Informatik",
            "https://www.spengergasse.at/?page_id=2114",
            "Describes the five-year Informatik program with breadth across software development, networks, business management, and multiple specialisations.",
        ),
        source(
            SourceId::Medizininformatik,
            "HTL Spengergasse – Medizininformatik",
            "https://www.spengergasse.at/?page_id=2112",
            "Outlines the Medizininformatik focus under Biomedizin- und Gesundheitstechnik with medical technology and healthcare-oriented IT.",
        ),
        source(
            SourceId::TechnischesManagement,
            "HTL Spengergasse – Technisches Management & Umwelt",
            "https://www.spengergasse.at/?page_id=2153",
            "Highlights the Wirtschaftsingenieure department with competencies in product and process management blending technology and business.",
        ),
        source(
            SourceId::Animation,
            "HTL Spengergasse – Animation",
            "https://www.spengergasse.at/?page_id=2117",
            "Explains the design department's animation track emphasising storytelling, visual production and creative technology.",
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn departments() -> Vec<Department> {
    vec![
        Department {
            id: SourceId::Informatik,
            name: "Informatik".to_string(),
            focus: "Full-spectrum computer science covering programming, databases, networks, business and project management with elective specialisations.".to_string(),
            best_for: "Students who like solving problems with technology and want many paths open across IT, business and creative tech.".to_string(),
            highlights: strings(&[
                "Solid base in software engineering, databases and distributed systems",
                "Elective strands such as Entrepreneurship, Ethical Hacking, Game Development and Internet of Things",
                "English-speaking cohort option for global readiness",
            ]),
            considerations: "Requires comfort with continuous technical practice and projects across all five years.".to_string(),
            recommended: true,
        },
        Department {
            id: SourceId::TechnischesManagement,
            name: "Technisches Management & Umwelt".to_string(),
            focus: "Blend of engineering, product development, quality management and business processes within the Wirtschaftsingenieure department.".to_string(),
            best_for: "Organisers who enjoy coordinating people, sustainability topics and translating between technical and business teams.".to_string(),
            highlights: strings(&[
                "Training in product and process management from development to quality and safety",
                "Exposure to environmental technology and facility management",
                "Prepares for roles such as project leader, innovations manager or quality specialist",
            ]),
            considerations: "Less depth in pure programming; suits students who prefer management-tech crossover rather than deep coding.".to_string(),
            recommended: false,
        },
        Department {
            id: SourceId::Medizininformatik,
            name: "Medizininformatik".to_string(),
            focus: "Health technology programme combining biology, medical device engineering and specialised medical software development.".to_string(),
            best_for: "Students fascinated by healthcare, biology and applying IT to medical challenges.".to_string(),
            highlights: strings(&[
                "Covers medical electronics, health data security and project management",
                "Offers preparation for medical school entrance exams",
                "Connects with healthcare industry projects",
            ]),
            considerations: "Curriculum is strongly healthcare-oriented; may feel narrow if you prefer non-medical fields later on.".to_string(),
            recommended: false,
        },
        Department {
            id: SourceId::Animation,
            name: "Animation".to_string(),
            focus: "Design track centred on storytelling, 2D/3D animation, motion design and media production with industry tools.".to_string(),
            best_for: "Creative all-rounders who thrive on visual storytelling, sound and concept art alongside technical media skills.".to_string(),
            highlights: strings(&[
                "Hands-on work with Adobe Creative Suite, Autodesk Maya and studio production",
                "Develops storytelling, dramaturgy and visual communication",
                "Builds a creative portfolio ready for media and entertainment careers",
            ]),
            considerations: "Requires passing an artistic aptitude test and sustained creative output under deadlines.".to_string(),
            recommended: false,
        },
    ]
}

fn recommendation_reasons() -> Vec<RecommendationReason> {
    vec![
        RecommendationReason {
            title: "Breadth that rewards an all-rounder".to_string(),
            body: vec![
                Segment::text("Informatik keeps every major IT discipline—programming, databases, networks and business management—in the core timetable, so you are constantly switching perspectives and skill sets rather than specialising too early."),
                Segment::Cite(SourceId::Informatik),
            ],
        },
        RecommendationReason {
            title: "Room to explore passions later".to_string(),
            body: vec![
                Segment::text("Starting in the fourth year you can pick electives ranging from Entrepreneurship to Ethical Hacking or Game Development, letting you lean into what excites you once you have sampled many directions."),
                Segment::Cite(SourceId::Informatik),
            ],
        },
        RecommendationReason {
            title: "Future-proof language skills".to_string(),
            body: vec![
                Segment::text("An entire class runs with English as the working language, which is rare at HTLs and makes you ready for international teamwork or study abroad without closing off German-language options."),
                Segment::Cite(SourceId::Informatik),
            ],
        },
    ]
}

fn exploration_tips() -> Vec<String> {
    strings(&[
        "Attend the school's InfoTag or open house to sit in sample lessons and talk to teachers from each department.",
        "Ask current students how much independent project time versus guided instruction they receive to match your learning style.",
        "Review sample projects or diploma theses from the departments you like—do you get excited by the outcomes?",
        "Consider your plan after the HTL: Informatik keeps university, FH or immediate job options open across the tech sector.",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_sizes() {
        let catalog = builtin();
        assert_eq!(catalog.sources().len(), 4);
        assert_eq!(catalog.departments().len(), 4);
        assert_eq!(catalog.reasons().len(), 3);
        assert_eq!(catalog.tips().len(), 4);
    }

    #[test]
    fn test_builtin_department_order() {
        let names: Vec<&str> = builtin()
            .departments()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Informatik",
                "Technisches Management & Umwelt",
                "Medizininformatik",
                "Animation",
            ]
        );
    }

    #[test]
    fn test_builtin_recommendation_is_informatik() {
        let recommended = builtin().recommended().unwrap();
        assert_eq!(recommended.id, SourceId::Informatik);
        assert_eq!(
            builtin().departments().iter().filter(|d| d.recommended).count(),
            1
        );
    }

    #[test]
    fn test_builtin_citation_numbers_follow_source_order() {
        let catalog = builtin();
        for (position, source) in catalog.sources().iter().enumerate() {
            assert_eq!(catalog.citation_number(source.id), Some(position + 1));
        }
        assert_eq!(catalog.sources()[0].title, "HTL Spengergasse – Informatik");
        assert_eq!(catalog.citation_number(SourceId::TechnischesManagement), Some(3));
    }

    #[test]
    fn test_every_source_id_has_a_department() {
        for id in SourceId::ALL {
            assert!(builtin().find_department(id).is_some(), "no department for {}", id);
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }
}
