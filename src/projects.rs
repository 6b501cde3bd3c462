use std::ops::Range;

pub const PROJECTS_PER_PAGE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repository: &'static str,
    pub live: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Collab-O",
        subtitle: "AI freelance collaboration platform",
        description: "A modern freelance collaboration platform leveraging AI to connect clients and freelancers seamlessly.",
        tech: &["MERN", "Gemini", "Stripe", "Tailwind CSS"],
        repository: "https://github.com/kalviumcommunity/S76_harish_Capstone_collab_o.git",
        live: "https://freecoll.netlify.app/",
    },
    Project {
        title: "Cultura connect",
        subtitle: "Social networking for culture enthusiasts",
        description: "Collaborative task management with real-time updates and team collaboration features.",
        tech: &["Next.js", "TypeScript", "Material UI", "Real-time Sync"],
        repository: "https://github.com/kalviumcommunity/s76_Weird_Indian_cultures.git",
        live: "https://deo.co",
    },
    Project {
        title: "DataSpeaks",
        subtitle: "Simple english to queries",
        description: "Convert natural language to SQL queries effortlessly.",
        tech: &["TypeScript", "Next.js", "rag", "langchain"],
        repository: "https://github.com/kalviumcommunity/DataSpeaks.git",
        live: "https://demo.com",
    },
    Project {
        title: "Ecomerce Platform",
        subtitle: "Robust online shopping experience",
        description: "A scalable e-commerce platform with seamless shopping and payment integration.",
        tech: &["React", "Node.js", "PayPal", "MongoDB"],
        repository: "https://github.com/harishb2006/Ecommerce-Follow-Along.git",
        live: "https://demo.com",
    },
    Project {
        title: "Knowledge assistant",
        subtitle: "AI-powered knowledge management",
        description: "An AI assistant that helps manage and retrieve knowledge efficiently.",
        tech: &["Python", "langchain", "gemini", "rag"],
        repository: "https://github.com/harishb2006/know.git",
        live: "https://demo.com",
    },
    Project {
        title: "White board App",
        subtitle: "Collaborative drawing and brainstorming, ongoing project",
        description: "A collaborative whiteboard app with real-time drawing and chat features.",
        tech: &["React", "Socket.io", "Canvas API", "Node.js"],
        repository: "https://github.com/harishb2006/WhiteBoardToCode.git",
        live: "https://demo.com",
    },
    Project {
        title: "AI notes taker",
        subtitle: "Take notes with AI assistance",
        description: "An AI-powered note-taking app that helps you create and manage notes efficiently.",
        tech: &["Python", "langchain", "gemini", "Firebase"],
        repository: "https://github.com/username/social-analytics",
        live: "https://demo.com",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
    /// Tailwind gradient stops for the badge.
    pub gradient: &'static str,
}

const fn tech(name: &'static str, icon: &'static str, gradient: &'static str) -> Technology {
    Technology {
        name,
        icon,
        gradient,
    }
}

pub static TECHNOLOGIES: &[Technology] = &[
    tech("HTML5", "◉", "from-orange-500 to-red-500"),
    tech("CSS3", "◉", "from-blue-500 to-blue-600"),
    tech("Tailwind CSS", "~", "from-cyan-400 to-blue-500"),
    tech("JavaScript", "JS", "from-yellow-400 to-yellow-600"),
    tech("TypeScript", "TS", "from-blue-500 to-blue-700"),
    tech("ReactJs", "⚛", "from-cyan-400 to-blue-500"),
    tech("Next.js", "▲", "from-gray-800 to-black"),
    tech("Node.js", "◉", "from-green-500 to-green-700"),
    tech("Java", "◈", "from-red-500 to-orange-600"),
    tech("Python", "●", "from-blue-400 to-yellow-500"),
    tech("MySQL", "◈", "from-blue-500 to-blue-700"),
    tech("Git", "◈", "from-orange-600 to-red-600"),
    tech("Supabase", "⚡", "from-green-400 to-emerald-600"),
    tech("Express.js", "×", "from-gray-600 to-gray-800"),
    tech("MongoDB", "◉", "from-green-500 to-green-700"),
    tech("PostgreSQL", "◉", "from-blue-600 to-indigo-700"),
    tech("AWS", "≡", "from-orange-400 to-yellow-600"),
    tech("Docker", "●", "from-blue-500 to-cyan-600"),
    tech("CI/CD", "◉", "from-purple-500 to-pink-600"),
];

/// Page cursor over `total` items shown `per_page` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    per_page: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            page: 0,
            per_page: per_page.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Moves forward one page; stays put on the last page.
    pub fn next(self) -> Self {
        if self.has_next() {
            Self {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Moves back one page; stays put on the first page.
    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self
        }
    }

    pub fn go_to(self, page: usize) -> Self {
        Self {
            page: page.min(self.total_pages().saturating_sub(1)),
            ..self
        }
    }

    /// Indices of the items visible on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.range();
        &items[start.min(items.len())..end.min(items.len())]
    }
}
