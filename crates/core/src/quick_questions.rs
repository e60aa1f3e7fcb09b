//! Canned questions that are answered without calling the model.

/// A fixed question and its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuickQuestion {
    /// The question, also used as its label.
    pub question: &'static str,
    /// The canned answer.
    pub answer: &'static str,
}

/// The questions offered by default.
pub const QUICK_QUESTIONS: [QuickQuestion; 5] = [
    QuickQuestion {
        question: "How do I start a career in data analytics?",
        answer: "You can start by learning SQL, Python, and data visualization tools like Power BI or Tableau. Internships and projects help gain practical experience.",
    },
    QuickQuestion {
        question: "What skills are needed for a software developer?",
        answer: "Strong programming skills, problem-solving, version control (Git), and knowledge of algorithms, data structures, and frameworks relevant to your domain.",
    },
    QuickQuestion {
        question: "How can I improve my resume?",
        answer: "Tailor your resume for each job, highlight achievements with metrics, keep it concise (1 page), and ensure proper formatting.",
    },
    QuickQuestion {
        question: "What is the best way to prepare for interviews?",
        answer: "Practice coding or domain-specific questions, do mock interviews, research the company, and prepare strong STAR-format answers for behavioral questions.",
    },
    QuickQuestion {
        question: "How do I switch careers effectively?",
        answer: "Identify transferable skills, gain relevant certifications or training, network in the new industry, and start with internships or freelance projects to build experience.",
    },
];
