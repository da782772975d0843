//! Canned advice used when the advice service is unreachable or leaves sections out.
//!
//! Content is deterministic: the same skills (and goal, for roadmaps) always select
//! the same text.

use crate::domain::categories::{Branch, Category, DecisionTree};
use crate::domain::entities::RoadmapStage;

/// Career-advice sections for one category.
#[derive(Debug)]
pub struct CareerTemplate {
    pub certifications: &'static str,
    pub skills: &'static str,
    pub tips: &'static str,
}

/// Resume-feedback sections. `{skills}` and `{internships}` are substituted on render.
#[derive(Debug)]
pub struct ResumeTemplate {
    pub general: &'static str,
    pub strengths: &'static str,
    pub improvements: &'static str,
}

/// Four stages, junior to lead.
pub type RoadmapTemplate = [(&'static str, &'static str); 4];

/// Goal used when no category matches the user's profile.
pub const DEFAULT_GOAL: &str = "Software Engineer";

/// Substituted for `{internships}` when the user has no complete internship entries.
const NO_INTERNSHIPS: &str = "your recent roles";

const CAREER_TIPS: &str = "• Create a portfolio that showcases your projects\n\
• Network with professionals in your field\n\
• Contribute to open-source projects\n\
• Stay updated with industry trends\n\
• Practice technical and behavioral interview skills";

pub static CAREER_TREE: DecisionTree<CareerTemplate> = DecisionTree {
    branches: &[
        Branch {
            category: Category::Mobile,
            content: CareerTemplate {
                certifications: "• Google Associate Android Developer\n\
• Android Certified Application Developer\n\
• Kotlin Certified Developer\n\
• Mobile App Security Certification",
                skills: "• Jetpack Compose for modern UI\n\
• Kotlin Coroutines and Flow\n\
• CI/CD for mobile apps\n\
• Firebase for backend services\n\
• Mobile app security practices",
                tips: CAREER_TIPS,
            },
        },
        Branch {
            category: Category::Web,
            content: CareerTemplate {
                certifications: "• Meta Front-End Developer Professional Certificate\n\
• W3C Front-End Web Developer\n\
• OpenJS Node.js Application Developer\n\
• Google UX Design Professional Certificate",
                skills: "• TypeScript and modern JavaScript\n\
• React or Vue state management\n\
• Web performance and accessibility\n\
• REST and GraphQL API integration\n\
• Automated testing for web apps",
                tips: CAREER_TIPS,
            },
        },
        Branch {
            category: Category::DataMl,
            content: CareerTemplate {
                certifications: "• TensorFlow Developer Certificate\n\
• AWS Certified Machine Learning\n\
• Microsoft Certified: Azure AI Engineer\n\
• IBM AI Engineering Professional Certificate",
                skills: "• Data structures and algorithms\n\
• Machine learning frameworks (TensorFlow, PyTorch)\n\
• Data visualization\n\
• API development with FastAPI\n\
• Backend development with Django/Flask",
                tips: CAREER_TIPS,
            },
        },
        Branch {
            category: Category::Cloud,
            content: CareerTemplate {
                certifications: "• AWS Certified Solutions Architect\n\
• Google Cloud Professional Cloud Architect\n\
• Microsoft Azure Fundamentals\n\
• CompTIA Cloud+",
                skills: "• Containerization (Docker, Kubernetes)\n\
• Infrastructure as Code (Terraform)\n\
• Serverless architecture\n\
• Cloud security best practices\n\
• Multi-cloud strategies",
                tips: CAREER_TIPS,
            },
        },
    ],
    default: CareerTemplate {
        certifications: "• CompTIA A+ Certification\n\
• Microsoft Certified: Azure Fundamentals\n\
• Certified Associate in Project Management\n\
• Google IT Support Professional Certificate",
        skills: "• Full-stack development fundamentals\n\
• Version control (Git)\n\
• Communication and collaboration\n\
• Problem-solving and debugging\n\
• Basic DevOps understanding",
        tips: CAREER_TIPS,
    },
};

const RESUME_IMPROVEMENTS: &str = "• Add more quantifiable achievements to your internship descriptions\n\
• Consider expanding your skills section with more specific technologies\n\
• Add a professional summary at the top of your resume\n\
• Make sure each experience has 3-5 bullet points with action verbs";

pub static RESUME_TREE: DecisionTree<ResumeTemplate> = DecisionTree {
    branches: &[
        Branch {
            category: Category::Mobile,
            content: ResumeTemplate {
                general: "Your resume shows a solid start in mobile development. \
Lead with the apps you shipped and the platforms they ran on.",
                strengths: "• Your experience with {skills} is in steady demand for mobile teams\n\
• Your work as {internships} gives you practical industry exposure\n\
• You've shown initiative through your projects and milestones",
                improvements: "• Link to apps on the Play Store or a public repository\n\
• Quantify impact: downloads, ratings, crash-free sessions\n\
• Mention the architecture patterns you used (MVVM, Compose)\n\
• Make sure each experience has 3-5 bullet points with action verbs",
            },
        },
        Branch {
            category: Category::Web,
            content: ResumeTemplate {
                general: "Your resume reflects hands-on web development experience. \
Put the products you built and the frameworks behind them up front.",
                strengths: "• Your experience with {skills} matches what web teams hire for\n\
• Your work as {internships} shows you can deliver user-facing features\n\
• You've shown initiative through your projects and milestones",
                improvements: "• Add a portfolio link with live demos\n\
• Quantify impact: load times, conversion, users served\n\
• Call out accessibility and testing practices you followed\n\
• Make sure each experience has 3-5 bullet points with action verbs",
            },
        },
        Branch {
            category: Category::DataMl,
            content: ResumeTemplate {
                general: "Your resume points toward data and machine learning work. \
Frame each experience around the question you answered and the result.",
                strengths: "• Your experience with {skills} is highly relevant for data roles\n\
• Your work as {internships} gives you exposure to real datasets\n\
• You've shown initiative through your projects and milestones",
                improvements: "• State dataset sizes, model metrics and business outcomes\n\
• Link notebooks or repositories that show your analysis\n\
• List the libraries and tooling you used for each project\n\
• Make sure each experience has 3-5 bullet points with action verbs",
            },
        },
    ],
    default: ResumeTemplate {
        general: "Your resume is starting to take shape nicely. \
You have some relevant experience that can be highlighted better.",
        strengths: "• Your experience with {skills} is highly relevant in today's job market\n\
• Your internship as {internships} gives you practical industry exposure\n\
• You've shown initiative through your projects and milestones",
        improvements: RESUME_IMPROVEMENTS,
    },
};

/// Goal inferred from the profile before choosing a roadmap.
pub static GOAL_TREE: DecisionTree<&'static str> = DecisionTree {
    branches: &[
        Branch {
            category: Category::Mobile,
            content: "Mobile App Developer",
        },
        Branch {
            category: Category::Web,
            content: "Web Developer",
        },
        Branch {
            category: Category::DataMl,
            content: "Data Scientist",
        },
    ],
    default: DEFAULT_GOAL,
};

pub static ROADMAP_TREE: DecisionTree<RoadmapTemplate> = DecisionTree {
    branches: &[
        Branch {
            category: Category::Mobile,
            content: [
                (
                    "Junior Mobile Developer",
                    "Focus on mastering fundamental Android development with Kotlin, XML layouts, and basic UI components. Build small personal projects to demonstrate your skills. Learn about MVVM, Activity/Fragment lifecycle, and RecyclerView.",
                ),
                (
                    "Mid-Level Mobile Developer",
                    "Expand your knowledge to include Jetpack components, advanced UI with Compose, concurrency with Coroutines, and dependency injection. Work on apps with complex features like offline caching, multimedia, and location services.",
                ),
                (
                    "Senior Mobile Developer",
                    "Master system architecture, performance optimization, and CI/CD for mobile apps. Contribute to open-source projects, mentor junior developers, and lead feature teams. Develop expertise in cross-platform development or app security.",
                ),
                (
                    "Mobile Lead / Architect",
                    "Define technical direction for mobile applications, create coding standards, and lead architecture decisions. Mentor teams, collaborate with product managers, and ensure code quality through code reviews and technical specifications.",
                ),
            ],
        },
        Branch {
            category: Category::Web,
            content: [
                (
                    "Junior Web Developer",
                    "Focus on HTML, CSS, JavaScript fundamentals and popular frameworks like React or Vue. Build responsive UIs, work with APIs, and understand browser compatibility issues. Create small projects that showcase your ability.",
                ),
                (
                    "Mid-Level Web Developer",
                    "Develop expertise in state management, advanced component patterns, and performance optimization. Learn backend technologies like Node.js or understand how to integrate with existing APIs. Master Git workflows and automated testing.",
                ),
                (
                    "Senior Web Developer / Engineer",
                    "Architect complex web applications, implement design systems, and lead feature development. Develop deep expertise in accessibility, internationalization, and web security. Mentor junior developers and influence technical decisions.",
                ),
                (
                    "Lead Frontend Engineer / Web Architect",
                    "Define frontend architecture, establish best practices, and lead development teams. Work closely with design, product, and backend teams to create seamless user experiences. Make high-level technical decisions and mentor team members.",
                ),
            ],
        },
        Branch {
            category: Category::DataMl,
            content: [
                (
                    "Junior Data Analyst",
                    "Learn data manipulation with Python (Pandas), SQL basics, and data visualization. Work on exploratory data analysis tasks, create simple dashboards, and understand basic statistical concepts. Build a portfolio of data projects.",
                ),
                (
                    "Data Scientist / ML Engineer",
                    "Master advanced statistics, machine learning algorithms, and deep learning frameworks. Work on end-to-end ML projects from data collection to deployment. Develop expertise in a specific domain like NLP, computer vision, or recommendation systems.",
                ),
                (
                    "Senior Data Scientist",
                    "Lead complex data science projects, design ML systems, and work on model optimization. Collaborate with product and engineering teams to integrate ML solutions. Develop expertise in advanced topics like reinforcement learning or AI ethics.",
                ),
                (
                    "Lead Data Scientist / ML Architect",
                    "Architect machine learning systems, develop ML strategies, and lead data science teams. Define technical roadmaps, establish best practices, and mentor team members. Work closely with leadership to align data science initiatives with business goals.",
                ),
            ],
        },
    ],
    default: [
        (
            "Junior Software Engineer",
            "Focus on mastering programming fundamentals, version control, and basic software development processes. Work on small features under guidance and learn from code reviews. Build a portfolio of projects showcasing your skills.",
        ),
        (
            "Mid-Level Software Engineer",
            "Take ownership of medium-sized features and components. Develop expertise in software design patterns, automated testing, and DevOps practices. Mentor junior developers and contribute to technical discussions.",
        ),
        (
            "Senior Software Engineer",
            "Lead the development of complex features and systems. Make architectural decisions, perform code reviews, and mentor other engineers. Develop deep expertise in system design, performance optimization, and engineering best practices.",
        ),
        (
            "Tech Lead / Software Architect",
            "Define technical vision, architect complex systems, and lead engineering teams. Balance technical excellence with business requirements. Mentor engineers, establish best practices, and collaborate with product and leadership teams.",
        ),
    ],
};

pub fn career_template(skills: &str) -> (Category, &'static CareerTemplate) {
    CAREER_TREE.select(&[skills])
}

pub fn resume_template(skills: &str) -> (Category, &'static ResumeTemplate) {
    RESUME_TREE.select(&[skills])
}

/// Fills `{skills}` and `{internships}` placeholders.
pub fn render(template: &str, skills: &str, internships: &str) -> String {
    let internships = if internships.trim().is_empty() {
        NO_INTERNSHIPS
    } else {
        internships
    };
    template
        .replace("{skills}", skills)
        .replace("{internships}", internships)
}

/// Target role guessed from the internship summary and skills.
pub fn infer_goal(internship_summary: &str, skills: &str) -> &'static str {
    *GOAL_TREE.select(&[internship_summary, skills]).1
}

/// The fixed stage sequence for a goal and skill set.
pub fn roadmap_stages(goal: &str, skills: &str) -> (Category, Vec<RoadmapStage>) {
    let (category, template) = ROADMAP_TREE.select(&[goal, skills]);
    let stages = template
        .iter()
        .map(|(title, description)| RoadmapStage::new(*title, *description))
        .collect();
    (category, stages)
}
