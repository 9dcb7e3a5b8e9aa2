//! Built-in catalogs used when a slot is empty or unreadable.

use crate::domain::{Project, ProjectType, Service, ServiceCategory, Technologies};

fn techs(list: &[&str]) -> Technologies {
    list.iter().collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    description: &str,
    project_type: ProjectType,
    technologies: &[&str],
    github_url: Option<&str>,
    live_url: Option<&str>,
    featured: bool,
    order: u32,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        project_type,
        technologies: techs(technologies),
        github_url: github_url.map(str::to_string),
        live_url: live_url.map(str::to_string),
        image_url: None,
        featured,
        order,
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "E-Commerce Website",
            "A fully responsive e-commerce website built with Next.js and React, featuring product filtering, shopping cart, and Stripe integration for secure payments. Includes admin dashboard for inventory management.",
            ProjectType::Web,
            &["Next.js", "React", "Node.js", "MongoDB", "Stripe"],
            Some("https://github.com/username/ecommerce-platform"),
            Some("https://ecommerce-platform.example.com"),
            true,
            1,
        ),
        project(
            "2",
            "Corporate Website Redesign",
            "Complete UI/UX redesign for a financial services company, focusing on user experience improvements and WCAG 2.1 accessibility compliance. Resulted in 45% increase in conversion rate.",
            ProjectType::Design,
            &["Figma", "Adobe XD", "WCAG 2.1", "User Testing"],
            Some("https://github.com/username/finance-ux-redesign"),
            Some("https://finance-company.example.com"),
            true,
            2,
        ),
        project(
            "3",
            "SaaS Dashboard",
            "Interactive dashboard for a SaaS platform with real-time data visualization, user management, and subscription analytics. Built with a focus on performance optimization.",
            ProjectType::Web,
            &["Vue.js", "D3.js", "Express", "PostgreSQL"],
            Some("https://github.com/username/saas-dashboard"),
            None,
            false,
            3,
        ),
        project(
            "4",
            "Technical Architecture Overhaul",
            "Conducted a complete architecture review and implementation for a healthcare startup, migrating from monolithic to microservices architecture. Reduced server costs by 35% and improved response times by 60%.",
            ProjectType::Consulting,
            &["System Design", "Docker", "Kubernetes", "AWS"],
            Some("https://github.com/username/healthcare-architecture"),
            None,
            true,
            4,
        ),
        project(
            "5",
            "SEO & Content Strategy",
            "Comprehensive SEO audit and content strategy for an e-learning platform. Implemented technical SEO improvements and content optimization that resulted in 250% increase in organic traffic within 6 months.",
            ProjectType::Marketing,
            &["SEO", "Content Strategy", "Google Analytics", "Keyword Research"],
            None,
            Some("https://learning-platform.example.com"),
            true,
            5,
        ),
        project(
            "6",
            "Mobile App UI Kit",
            "Designed and developed a comprehensive mobile UI component library with over 200 reusable components following atomic design principles. Includes dark mode support and accessibility features.",
            ProjectType::Design,
            &["React Native", "Storybook", "Styled Components", "Accessibility"],
            Some("https://github.com/username/mobile-ui-kit"),
            None,
            false,
            6,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    title: &str,
    description: &str,
    rate: &str,
    duration: &str,
    availability: &str,
    category: ServiceCategory,
    order: u32,
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        rate: Some(rate.to_string()),
        duration: Some(duration.to_string()),
        availability: Some(availability.to_string()),
        category,
        order,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            "1",
            "Web Development",
            "End-to-end website and web-app development using modern frameworks (React, Node.js, Django), responsive layouts, and CMS integration. Includes testing and deployment.",
            "$75/hour",
            "4-8 weeks (small-scale); 12-16 weeks (enterprise)",
            "Limited (10 hrs/week)",
            ServiceCategory::Development,
            1,
        ),
        service(
            "2",
            "UI/UX Design",
            "User research, wireframing, high-fidelity mockups and interactive prototypes. Focus on accessibility (WCAG 2.1) and conversion-optimized interfaces.",
            "$65/hour",
            "2-4 weeks",
            "Available",
            ServiceCategory::Design,
            2,
        ),
        service(
            "3",
            "Technical Consulting",
            "Architecture reviews, performance audits, DevOps strategy, and technology road-mapping. Includes a final report with prioritized recommendations.",
            "$90/hour",
            "1-2 weeks",
            "Available",
            ServiceCategory::Consulting,
            3,
        ),
        service(
            "4",
            "SEO & Digital Marketing",
            "On-page/off-page SEO audits, keyword strategy, content optimization, and paid-media campaign setup (Google Ads, social).",
            "$60/hour or $2,500/project",
            "4-6 weeks",
            "Available",
            ServiceCategory::Consulting,
            4,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    #[test]
    fn test_fallback_catalogs_are_valid_and_dense() {
        let projects = projects();
        for (i, p) in projects.iter().enumerate() {
            assert!(p.validate().is_ok(), "{} should validate", p.id);
            assert_eq!(p.order as usize, i + 1);
        }
        let services = services();
        for (i, s) in services.iter().enumerate() {
            assert!(s.validate().is_ok());
            assert_eq!(s.order as usize, i + 1);
        }
    }
}
