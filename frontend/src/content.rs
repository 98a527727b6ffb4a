// Static copy for the site and the demo admin portal.

pub struct Card {
    pub title: &'static str,
    pub desc: &'static str,
}

const fn card(title: &'static str, desc: &'static str) -> Card {
    Card { title, desc }
}

pub struct Metric {
    pub kpi: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub struct Phase {
    pub title: &'static str,
    pub when: &'static str,
    pub points: &'static [&'static str],
}

pub struct SolutionTab {
    pub key: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#solution", "ImmersiFair"),
    ("#features", "Features"),
    ("#metrics", "Outcomes"),
    ("#how", "How it works"),
    ("#revenue", "Revenue"),
    ("#timeline", "Timeline"),
    ("#contact", "Partner"),
    ("#admin", "Admin"),
];

pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#solution", "ImmersiFair"),
    ("#revenue", "Partners"),
    ("#contact", "Contact"),
    ("#admin", "Admin"),
];

pub const PARTNERS: &[&str] = &[
    "Partner: Talentbank",
    "Partner: University Hub",
    "Sponsor: MedCare Asia",
    "Sponsor: TechWorks",
    "Community: Youth Careers MY",
];

pub const ABOUT_POINTS: &[Card] = &[
    card("3‑star skill ratings", "Precision, creativity, efficiency."),
    card("Digital badges", "Shareable, verified credentials."),
    card("Recruiter analytics", "Real‑time performance insights."),
    card("Higher engagement", "+35–60% dwell & participation."),
];

pub const SOLUTION_TABS: &[SolutionTab] = &[
    SolutionTab {
        key: "eng",
        name: "Engineering",
        desc: "PCB debug, assembly and prototyping sims.",
        bullets: &["Continuity test", "Replace component", "Quality check"],
    },
    SolutionTab {
        key: "med",
        name: "Medical",
        desc: "Suturing and clinical workflows.",
        bullets: &["Knot tying", "Incision & suture", "Aseptic steps"],
    },
    SolutionTab {
        key: "bus",
        name: "Business",
        desc: "Client pitch & negotiation.",
        bullets: &["Discovery", "Proposal", "Objection handling"],
    },
    SolutionTab {
        key: "cre",
        name: "Creative",
        desc: "3D modeling & animation.",
        bullets: &["Blockout", "Refine", "Render"],
    },
];

pub const FEATURES: &[Card] = &[
    card("ESP32 haptic gloves", "Force, vibration & tactile feedback—cost‑effective and robust."),
    card("Analytics dashboard", "Booth engagement, scores, trends and top performers."),
    card("Micro‑credentials", "Co‑branded, verifiable badges shareable on LinkedIn."),
    card("Safe & repeatable", "Practice risky workflows in a controlled digital twin."),
    card("5–12 minute sims", "Optimized for fair traffic with instant feedback & replays."),
    card("Sponsor modules", "Branded challenges for employer ROI and recall."),
];

pub const METRICS: &[Metric] = &[
    Metric { kpi: 50, suffix: "%", label: "booth→demo conversion" },
    Metric { kpi: 30, suffix: "%", label: "recruiter engagement uplift" },
    Metric { kpi: 10, suffix: "%", label: "demo→interview conversion" },
    Metric { kpi: 60, suffix: "%", label: "longer dwell & participation (up to)" },
    Metric { kpi: 70, suffix: "%", label: "badge earn rate" },
    Metric { kpi: 40, suffix: "%", label: "faster shortlisting (time‑to‑hire)" },
];

pub const STEPS: &[Card] = &[
    card("Smart registration", "Each student gets a unique digital ID to unlock sims and track achievements."),
    card("Enter themed hubs", "Engineering, Creative, Business, Medical—short, realistic challenges."),
    card("Haptic realism", "Affordable ESP32 gloves simulate force, texture and resistance."),
    card("Instant feedback", "3‑star skill ratings and error guidance drive faster improvement."),
    card("Leaderboards & badges", "Gamification boosts replays, dwell time and social sharing."),
    card("Recruiter scans", "Live performance summaries shift CV chats into skill‑first conversations."),
    card("Post‑fair analytics", "Subscribing employers access dashboards and follow up with top talent."),
];

pub const REVENUE: &[Card] = &[
    card("Tiered sponsorships", "Branded sims with engagement reports and talent insights."),
    card("Exhibitor VR add‑ons", "Upgrade any booth with ImmersiFair challenges."),
    card("Recruiter analytics", "Subscription dashboards with skills, scores & trends."),
    card("University licensing", "Campus events and Talentbank Academy integration."),
    card("Hardware rental/setup", "Stations, gloves and on‑site support for events."),
    card("Corporate‑funded access", "Free for students; sponsors fund engagement."),
];

pub const PHASES: &[Phase] = &[
    Phase {
        title: "Phase 1 — Prototype",
        when: "Q4 2025 – Q1 2026",
        points: &["Unity XR MVP sims", "Data pipeline", "Haptic glove integration"],
    },
    Phase {
        title: "Phase 2 — Pilot",
        when: "Q1 – Q2 2026",
        points: &["University & employer pilots", "Live fair deployments", "Refine UX & dashboards"],
    },
    Phase {
        title: "Phase 3 — Launch & scale",
        when: "Q2 – Q3 2026+",
        points: &["Flagship Talentbank launch", "Sponsor tiers & subs", "Academy integration"],
    },
];

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "How long is each simulation?",
        answer: "5–12 minutes, optimized for fair throughput with instant feedback.",
    },
    FaqItem {
        question: "Do students need prior VR experience?",
        answer: "No. We provide an onboarding flow; staff can assist in <30 seconds.",
    },
    FaqItem {
        question: "Can employers sponsor custom modules?",
        answer: "Yes—branding, analytics, and shortlisting integrations are available.",
    },
];

pub const CONTACT_FACTS: &[(&str, &str)] = &[
    ("Email", "hello@syntech.example"),
    ("HQ", "Kuala Lumpur, Malaysia"),
    ("Focus", "VR training • Haptics • Analytics"),
    ("Availability", "Pilots from Q1 2026"),
];

pub const ADMIN_STATS: &[Stat] = &[
    Stat { value: "6", label: "Live stations" },
    Stat { value: "214", label: "Simulations today" },
    Stat { value: "68%", label: "Badge earn rate" },
    Stat { value: "14", label: "Shortlists" },
];

pub const RECENT_SIGN_INS: &[&str] = &[
    "ENG Hub – PCB Debug – Avg score 3.2★",
    "MED Hub – Suturing – Avg score 2.9★",
    "BUS Hub – Client pitch – Avg score 3.4★",
    "CRE Hub – 3D Modeling – Avg score 3.1★",
];

pub const ADMIN_ACTIONS: &[&str] = &[
    "Export CSV",
    "Invite Recruiter",
    "Pause Station",
    "Reset Leaderboard",
];
