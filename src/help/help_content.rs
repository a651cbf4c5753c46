pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("? or F1", "Toggle this help"),
            ("Tab/Shift+Tab", "Next/previous tab"),
            ("1-4", "Jump to tab"),
            ("r", "Reload current tab"),
            ("c", "Dismiss newest notification"),
            ("q/Esc/Ctrl+C", "Quit"),
        ],
    },
    HelpSection {
        title: "TABLES",
        entries: &[
            ("j/k/↑/↓", "Select row"),
            ("h/l/←/→", "Previous/next page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
        ],
    },
    HelpSection {
        title: "SEARCH (Employees, Absences)",
        entries: &[
            ("/", "Focus search field"),
            ("Enter/Esc", "Leave search field"),
            ("Ctrl+U", "Clear search"),
        ],
    },
    HelpSection {
        title: "MANAGER ACTIONS",
        entries: &[
            ("d", "Delete selected employee or absence"),
            ("a", "Approve selected leave request"),
            ("x", "Reject selected leave request"),
            ("y/n", "Confirm/cancel a delete"),
        ],
    },
    HelpSection {
        title: "MONTHLY VIEWS",
        entries: &[
            ("[ / ]", "Previous/next month"),
            ("f", "Cycle status filter (Monthly Leaves)"),
        ],
    },
];

pub const HELP_FOOTER: &str = "Press ? or Esc to close";
