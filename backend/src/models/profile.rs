/// Hand-authored biography rendered into the chat context.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub about: &'static [&'static str],
    pub experience: &'static [Experience],
    pub education: &'static [&'static str],
    pub projects: &'static [Project],
    pub email: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub employment_type: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub featured: bool,
    pub summary: &'static str,
    pub github: &'static str,
    pub live: Option<&'static str>,
}

pub static PROFILE: Profile = Profile {
    about: &[
        "Fresh and result-oriented web developer with a strong foundation in frontend technologies.",
        "Enjoys building responsive, user-friendly web applications and turning creative ideas into clean, functional designs.",
        "Goal: Contribute to meaningful web projects and grow into a highly skilled frontend developer; become well-rounded, capable of modern, scalable, and accessible web applications.",
    ],
    experience: &[
        Experience {
            title: "Software Developer",
            company: "Healthpilot.ai",
            period: "Aug 2025 - Present",
            employment_type: "Full time",
            location: "Chennai, India",
            summary: "Web development with MERN stack and Next.js; dynamic frontends with React.js, Framer Motion, TypeScript; backend with Node.js and Express.js; exploring AI tools for UX.",
        },
        Experience {
            title: "Frontend Developer",
            company: "COSIE",
            period: "Aug 2025 - Present",
            employment_type: "Part time",
            location: "Remote, India",
            summary: "Same stack: MERN, Next.js, React, Framer Motion, TypeScript, Node.js, Express.js, AI tools.",
        },
        Experience {
            title: "MERN Stack Developer",
            company: "Brocamp",
            period: "Jan 2025 - Aug 2025",
            employment_type: "Full time",
            location: "Puducherry, India",
            summary: "Full-stack development; MongoDB, Express, React, Node.js; modern UI components and backend improvements.",
        },
    ],
    education: &[
        "B.S. Computer Science (1 year dropout).",
        "Government High School, Gandhi Nager – General Secondary, 69%.",
    ],
    projects: &[
        Project {
            name: "GymRatzz E-commerce",
            featured: true,
            summary: "MERN stack e-commerce; JavaScript, Tailwind, React, Redux, Node.js, MongoDB.",
            github: "github.com/S-MADHAN-KUMAR/gymratzz",
            live: Some("gymratzz.shop"),
        },
        Project {
            name: "E-ZONE",
            featured: false,
            summary: "E-commerce with add-to-cart, login (Supabase), Tailwind, React, Redux.",
            github: "github.com/MADHAN-KUMAR-161/EZONE",
            live: Some("ezone-shop.netlify.app"),
        },
        Project {
            name: "E-Portfolio",
            featured: false,
            summary: "Colorful portfolio with Framer Motion, Email.js, Tailwind, React.",
            github: "github.com/MADHAN-KUMAR-161/Portfolio",
            live: Some("e-portfolioo.netlify.app"),
        },
        Project {
            name: "Mini TypeScript CRUD App",
            featured: false,
            summary: "React + TypeScript CRUD.",
            github: "github.com/S-MADHAN-KUMAR/CRUD-APP-TYPESCRIPT",
            live: Some("crud-app-typescript.onrender.com"),
        },
        Project {
            name: "TODO App",
            featured: false,
            summary: "Todo app with Tailwind, React.",
            github: "github.com/S-MADHAN-KUMAR/TODO",
            live: Some("bright-zabaione-7412e3.netlify.app"),
        },
        Project {
            name: "User Management System",
            featured: false,
            summary: "UI with HTML, CSS, JavaScript, Node.js, MongoDB.",
            github: "github.com/S-MADHAN-KUMAR/UserManagement",
            live: None,
        },
    ],
    email: "madhankumar4195@gmail.com",
};
