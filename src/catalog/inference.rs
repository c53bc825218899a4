use crate::models::Listing;

/// Education levels the profile form offers
pub const EDUCATION_LEVELS: &[&str] = &[
    "B.Tech CS",
    "B.Tech IT",
    "B.Sc CS",
    "BCA",
    "MCA",
    "M.Sc CS",
    "M.Tech CS",
    "B.Des",
    "BFA",
    "BBA",
    "MBA",
    "B.Com",
    "BA",
    "MA",
    "Diploma",
];

/// Categorized skill options the profile form offers
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &["Python", "Java", "JavaScript", "TypeScript", "Kotlin", "Swift"],
    ),
    (
        "Web Technologies",
        &["HTML", "CSS", "React", "Node.js", "Angular", "API Development"],
    ),
    (
        "Data & Analytics",
        &["Excel", "SQL", "Data Analysis", "Statistics", "Power BI"],
    ),
    (
        "Design & Creative",
        &["Figma", "Photoshop", "Illustrator", "UI/UX", "Design"],
    ),
    (
        "Specialized",
        &[
            "Machine Learning",
            "TensorFlow",
            "Deep Learning",
            "Mobile Development",
            "Android",
            "iOS",
            "React Native",
            "Cloud Computing",
            "AWS",
            "Azure",
            "Docker",
            "Linux",
            "DevOps",
            "CI/CD",
            "Testing",
            "Selenium",
            "Security",
            "Networking",
            "Ethical Hacking",
        ],
    ),
    (
        "Business & Communication",
        &[
            "Communication",
            "Content Writing",
            "SEO",
            "Social Media",
            "Analytics",
            "HR Management",
            "Recruitment",
            "Research",
        ],
    ),
];

/// Skill inference table: every keyword found in the uppercased title
/// contributes its skills, evaluated in order
const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("IT", &["HTML", "CSS", "JavaScript", "Programming"]),
    (
        "E-GOVERNANCE",
        &["Technology", "Database Management", "Web Development"],
    ),
    ("FINANCE", &["Excel", "Accounting", "Financial Analysis", "SQL"]),
    (
        "WATER",
        &["Civil Engineering", "Environmental Science", "Project Management"],
    ),
    (
        "CIVIL",
        &[
            "AutoCAD",
            "Civil Engineering",
            "Project Planning",
            "Construction Management",
        ],
    ),
    (
        "URBAN PLANNING",
        &["GIS", "Urban Design", "AutoCAD", "Planning Software"],
    ),
    (
        "SOCIAL",
        &["Communication", "Community Development", "Social Work", "Research"],
    ),
    (
        "MARKETING",
        &["Digital Marketing", "Social Media", "Content Writing", "SEO"],
    ),
    ("MOBILE", &["Android", "iOS", "React Native", "Mobile Development"]),
    (
        "WEBSITE",
        &["HTML", "CSS", "JavaScript", "React", "Web Development"],
    ),
    ("DATA", &["Python", "Data Analysis", "Excel", "SQL", "Statistics"]),
    ("DESIGN", &["Figma", "Adobe XD", "UI/UX", "Graphic Design"]),
    (
        "ENVIRONMENTAL",
        &["Environmental Science", "Sustainability", "Research"],
    ),
    (
        "CAPACITY BUILDING",
        &["Training", "Communication", "Organizational Development"],
    ),
    ("ANDROID", &["Java", "Kotlin", "Android SDK", "Mobile Development"]),
    (
        "E-COMMERCE",
        &["Web Development", "Digital Marketing", "Business Analysis"],
    ),
];

const DEFAULT_SKILLS: &[&str] = &["General Skills", "Communication", "Teamwork"];

/// Education inference table: first keyword found in the uppercased title
/// wins, evaluated in order
const EDUCATION_BY_ROLE: &[(&str, &[&str])] = &[
    ("IT", &["B.Tech CS", "B.Tech IT", "BCA", "MCA"]),
    ("ENGINEERING", &["B.Tech", "B.E.", "Diploma Engineering"]),
    ("FINANCE", &["B.Com", "BBA", "MBA", "CA"]),
    (
        "CIVIL",
        &["B.Tech Civil", "Diploma Civil Engineering", "B.E. Civil"],
    ),
    ("SOCIAL", &["BA", "MA", "MSW", "B.Sc"]),
    ("DESIGN", &["B.Des", "BFA", "Diploma Design"]),
    ("MANAGEMENT", &["BBA", "MBA", "B.Com"]),
];

const DEFAULT_EDUCATION: &[&str] = &["Any Degree", "Graduate", "Undergraduate"];

/// Infer required skills from a listing title
///
/// Unions the skill lists of every matching keyword, keeping first-seen
/// order without duplicates.
pub fn infer_skills(title: &str) -> Vec<String> {
    let title = title.to_uppercase();
    let mut skills: Vec<String> = Vec::new();

    for (keyword, skill_list) in SKILL_KEYWORDS {
        if title.contains(keyword) {
            for skill in *skill_list {
                if !skills.iter().any(|s| s == skill) {
                    skills.push((*skill).to_string());
                }
            }
        }
    }

    if skills.is_empty() {
        DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        skills
    }
}

/// Infer acceptable education levels from a listing title
pub fn infer_education(title: &str) -> Vec<String> {
    let title = title.to_uppercase();

    for (keyword, levels) in EDUCATION_BY_ROLE {
        if title.contains(keyword) {
            return levels.iter().map(|s| s.to_string()).collect();
        }
    }

    DEFAULT_EDUCATION.iter().map(|s| s.to_string()).collect()
}

/// Build the free-text description shown on listing cards and reports
pub fn generate_description(listing: &Listing) -> String {
    format!(
        "Join {} as a {} in {}, {}. This {} position offers practical experience \
         in a professional environment. Duration: {}. Stipend: {}. Start immediately \
         and gain valuable industry experience.",
        listing.company,
        listing.title,
        listing.city,
        listing.state,
        listing.job_type.to_lowercase(),
        listing.duration,
        listing.stipend,
    )
}

/// Build role-specific application tips from the listing title
pub fn generate_application_tips(title: &str) -> String {
    let title = title.to_uppercase();

    let tips = if title.contains("IT") || title.contains("SOFTWARE") || title.contains("DEVELOPER")
    {
        "Highlight your technical projects and GitHub repositories. Include any \
         certifications in relevant technologies. Demonstrate problem-solving abilities \
         through code samples."
    } else if title.contains("FINANCE") || title.contains("ACCOUNTING") {
        "Showcase Excel proficiency and financial modeling skills. Include any coursework \
         in accounting or finance. Demonstrate attention to detail and analytical thinking."
    } else if title.contains("CIVIL") || title.contains("ENGINEER") {
        "Present CAD drawings and project work. Include site visit experience if any. \
         Highlight understanding of construction codes and safety standards."
    } else if title.contains("SOCIAL") || title.contains("COMMUNITY") {
        "Demonstrate communication skills and community engagement experience. Include \
         any volunteer work or social projects. Show cultural sensitivity and empathy."
    } else if title.contains("MARKETING") || title.contains("MEDIA") {
        "Build a portfolio of content samples and campaign examples. Show metrics from \
         previous social media work. Demonstrate creativity and strategic thinking."
    } else {
        "Tailor your resume to highlight relevant coursework and projects. Demonstrate \
         enthusiasm for learning. Include any internship or volunteer experience. Show \
         strong communication and teamwork skills."
    };

    tips.to_string()
}
