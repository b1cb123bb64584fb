//! Sample data the site ships with. There is no backing store.

use crate::models::catalog::{Category, EmploymentType, JobPosting, PortfolioItem};

#[allow(clippy::too_many_arguments)]
fn job(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    employment_type: EmploymentType,
    category: Category,
    salary: &str,
    posted_at: &str,
    description: &str,
    requirements: &[&str],
    is_remote: bool,
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        employment_type,
        category,
        salary: salary.to_string(),
        posted_at: posted_at.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        is_remote,
    }
}

pub fn job_postings() -> Vec<JobPosting> {
    vec![
        job(
            1,
            "Senior Web Developer",
            "TechSphere Solutions",
            "Bangalore, Karnataka",
            EmploymentType::FullTime,
            Category::Web,
            "₹12,00,000 - ₹18,00,000 / year",
            "2 days ago",
            "We are looking for an experienced web developer to join our team and help build responsive, user-friendly websites and web applications for our clients.",
            &[
                "5+ years of experience in web development",
                "Proficient in React, Node.js, and TypeScript",
                "Experience with RESTful APIs and GraphQL",
                "Strong understanding of UI/UX principles",
                "Portfolio of previous work",
            ],
            false,
        ),
        job(
            2,
            "Thumbnail Designer",
            "ContentCraft Media",
            "Mumbai, Maharashtra",
            EmploymentType::Freelance,
            Category::Thumbnail,
            "₹5,000 - ₹10,000 / project",
            "1 week ago",
            "We're seeking a creative thumbnail designer to create eye-catching thumbnails for YouTube channels and social media content.",
            &[
                "3+ years of experience in graphic design",
                "Proficient in Adobe Photoshop and Illustrator",
                "Understanding of YouTube algorithms and trends",
                "Ability to create attention-grabbing designs",
                "Portfolio of previous thumbnail work",
            ],
            true,
        ),
        job(
            3,
            "Video Editor",
            "VisualStory Productions",
            "Delhi, NCR",
            EmploymentType::Contract,
            Category::Video,
            "₹40,000 - ₹60,000 / month",
            "3 days ago",
            "Looking for a skilled video editor to join our team for a 6-month project creating corporate training videos and promotional content.",
            &[
                "4+ years of experience in video editing",
                "Proficient in Adobe Premiere Pro and After Effects",
                "Experience with color grading and audio editing",
                "Ability to work under tight deadlines",
                "Portfolio of previous video work",
            ],
            false,
        ),
        job(
            4,
            "Front-End Developer",
            "InnovateX",
            "Hyderabad, Telangana",
            EmploymentType::FullTime,
            Category::Web,
            "₹8,00,000 - ₹12,00,000 / year",
            "5 days ago",
            "Join our team to build beautiful, interactive user interfaces for our SaaS products using modern JavaScript frameworks.",
            &[
                "3+ years of experience in front-end development",
                "Proficient in React, Vue, or Angular",
                "Strong CSS and responsive design skills",
                "Experience with state management libraries",
                "Portfolio of previous work",
            ],
            true,
        ),
        job(
            5,
            "YouTube Thumbnail Specialist",
            "ViralVision Media",
            "Pune, Maharashtra",
            EmploymentType::PartTime,
            Category::Thumbnail,
            "₹20,000 - ₹30,000 / month",
            "1 day ago",
            "Create compelling thumbnails for our growing network of YouTube channels in the tech and lifestyle niches.",
            &[
                "2+ years of experience creating thumbnails",
                "Proficient in Photoshop and Canva",
                "Understanding of click-through rates and optimization",
                "Ability to work on multiple projects simultaneously",
                "Portfolio of previous thumbnail work",
            ],
            true,
        ),
        job(
            6,
            "Motion Graphics Designer",
            "AnimateNow",
            "Chennai, Tamil Nadu",
            EmploymentType::FullTime,
            Category::Video,
            "₹6,00,000 - ₹9,00,000 / year",
            "2 weeks ago",
            "We're looking for a creative motion graphics designer to create engaging animations for digital marketing campaigns and explainer videos.",
            &[
                "3+ years of experience in motion graphics",
                "Proficient in After Effects and Cinema 4D",
                "Strong understanding of animation principles",
                "Experience with character animation",
                "Portfolio of previous motion graphics work",
            ],
            false,
        ),
    ]
}

const PEXELS_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

fn pexels(photo: u32) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{PEXELS_PARAMS}")
}

fn item(
    id: u32,
    title: &str,
    category: Category,
    photo: u32,
    client: &str,
    description: &str,
) -> PortfolioItem {
    PortfolioItem {
        id,
        title: title.to_string(),
        category,
        image: pexels(photo),
        client: client.to_string(),
        description: description.to_string(),
    }
}

pub fn portfolio_items() -> Vec<PortfolioItem> {
    vec![
        item(
            1,
            "GreenEarth Foundation Website",
            Category::Web,
            326501,
            "GreenEarth Foundation",
            "A responsive website for an environmental NGO featuring donation integration and event management.",
        ),
        item(
            2,
            "TechSphere E-commerce Platform",
            Category::Web,
            265087,
            "TechSphere Ltd.",
            "A complete e-commerce solution with product management, payment gateway, and customer portal.",
        ),
        item(
            3,
            "Culinary Masters YouTube Channel",
            Category::Thumbnail,
            1640773,
            "Chef Anand Kapoor",
            "A series of eye-catching thumbnails for a popular cooking channel, increasing CTR by 45%.",
        ),
        item(
            4,
            "Wanderlust Travel Blog",
            Category::Thumbnail,
            2325446,
            "Wanderlust Adventures",
            "Consistent thumbnail designs for a travel blog, creating a recognizable brand identity.",
        ),
        item(
            5,
            "Sunrise Yoga Promotional Video",
            Category::Video,
            4325484,
            "Sunrise Yoga Studio",
            "A serene promotional video showcasing yoga sessions and wellness activities.",
        ),
        item(
            6,
            "NextGen Smartphone Launch",
            Category::Video,
            7014337,
            "TechGiant Mobile",
            "A dynamic product launch video featuring 3D animations and cinematic sequences.",
        ),
        item(
            7,
            "Mountain Finance Dashboard",
            Category::Web,
            7135121,
            "Mountain Finance Ltd.",
            "An intuitive financial dashboard with real-time data visualization and reporting tools.",
        ),
        item(
            8,
            "Fitness Journey Podcast Thumbnails",
            Category::Thumbnail,
            4498362,
            "FitLife Podcast",
            "A collection of engaging thumbnails for a fitness podcast, contributing to a 60% increase in listenership.",
        ),
        item(
            9,
            "Organic Beauty Product Showcase",
            Category::Video,
            3373739,
            "Natura Organics",
            "A series of product showcase videos highlighting natural ingredients and application methods.",
        ),
    ]
}
