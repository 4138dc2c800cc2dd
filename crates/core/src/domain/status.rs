// Status Palette - the single lookup table for status presentation

use super::job::JobStatus;

/// Label and accent color for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub status: JobStatus,
    pub label: &'static str,
    /// Hex color, `#rrggbb`
    pub color: &'static str,
}

impl StatusStyle {
    /// Accent color as an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

/// Every screen reads labels and colors from here
pub const STATUS_PALETTE: [StatusStyle; 4] = [
    StatusStyle {
        status: JobStatus::Scheduled,
        label: "Scheduled",
        color: "#3b82f6",
    },
    StatusStyle {
        status: JobStatus::InProgress,
        label: "In Progress",
        color: "#f59e0b",
    },
    StatusStyle {
        status: JobStatus::Completed,
        label: "Completed",
        color: "#22c55e",
    },
    StatusStyle {
        status: JobStatus::Cancelled,
        label: "Cancelled",
        color: "#94a3b8",
    },
];

impl JobStatus {
    pub fn style(&self) -> &'static StatusStyle {
        match self {
            JobStatus::Scheduled => &STATUS_PALETTE[0],
            JobStatus::InProgress => &STATUS_PALETTE[1],
            JobStatus::Completed => &STATUS_PALETTE[2],
            JobStatus::Cancelled => &STATUS_PALETTE[3],
        }
    }

    pub fn label(&self) -> &'static str {
        self.style().label
    }

    pub fn color(&self) -> &'static str {
        self.style().color
    }
}
