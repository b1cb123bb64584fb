use crate::models::profile::{
    CertificationEntry, EditorProfile, EducationEntry, ExperienceEntry, PortfolioPiece,
    Specialization,
};

const PEXELS_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

fn pexels(photo: u32) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{PEXELS_PARAMS}")
}

/// The demo editor profile shown on the editor profile page.
pub fn demo_profile() -> EditorProfile {
    EditorProfile {
        name: "Priya Sharma".to_string(),
        email: "priya.sharma@gmail.com".to_string(),
        phone: "+91 9876543210".to_string(),
        location: "Bangalore, Karnataka".to_string(),
        website: "https://priyasharma.dev".to_string(),
        about: "Creative web developer with 5+ years of experience specializing in React and modern front-end technologies. Passionate about creating intuitive user interfaces and optimized web experiences.".to_string(),
        specialization: Specialization::Web,
        skills: ["React", "TypeScript", "Tailwind CSS", "Node.js", "GraphQL", "Figma", "UI/UX"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        experience: vec![
            ExperienceEntry {
                id: 1,
                company: "TechNova Solutions".to_string(),
                position: "Senior Frontend Developer".to_string(),
                duration: "Jan 2021 - Present".to_string(),
                description: "Leading front-end development for multiple client projects, mentoring junior developers, and implementing best practices.".to_string(),
            },
            ExperienceEntry {
                id: 2,
                company: "Digital Crafters".to_string(),
                position: "Web Developer".to_string(),
                duration: "Jun 2018 - Dec 2020".to_string(),
                description: "Developed responsive websites and web applications for clients across various industries.".to_string(),
            },
        ],
        education: vec![EducationEntry {
            id: 1,
            institution: "Indian Institute of Technology, Delhi".to_string(),
            degree: "B.Tech in Computer Science".to_string(),
            year: "2014 - 2018".to_string(),
        }],
        portfolio: vec![
            PortfolioPiece {
                id: 1,
                title: "E-commerce Platform".to_string(),
                description: "A full-featured online store with product management and payment integration.".to_string(),
                image: pexels(230544),
            },
            PortfolioPiece {
                id: 2,
                title: "Travel Blog".to_string(),
                description: "A responsive blog site with content management system for a travel influencer.".to_string(),
                image: pexels(67112),
            },
            PortfolioPiece {
                id: 3,
                title: "Dashboard UI".to_string(),
                description: "An analytics dashboard with data visualization and reporting features.".to_string(),
                image: pexels(97077),
            },
        ],
        certifications: vec![
            CertificationEntry {
                id: 1,
                name: "Advanced React Patterns".to_string(),
                issuer: "Frontend Masters".to_string(),
                year: "2022".to_string(),
            },
            CertificationEntry {
                id: 2,
                name: "UI/UX Design Fundamentals".to_string(),
                issuer: "DesignLab".to_string(),
                year: "2021".to_string(),
            },
        ],
    }
}
