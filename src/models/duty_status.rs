use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Driving,
    OnDutyNotDriving,
    OffDuty,
    SleeperBerth,
}

impl DutyStatus {
    pub const COUNT: usize = 4;

    /// Row order of the paper log sheet, top to bottom.
    pub const ALL: [DutyStatus; Self::COUNT] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Convert wire tag → enum
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "driving" => Some(DutyStatus::Driving),
            "on_duty_not_driving" => Some(DutyStatus::OnDutyNotDriving),
            "off_duty" => Some(DutyStatus::OffDuty),
            "sleeper_berth" => Some(DutyStatus::SleeperBerth),
            _ => None,
        }
    }

    /// Convert enum → wire tag
    pub fn as_tag(&self) -> &'static str {
        match self {
            DutyStatus::Driving => "driving",
            DutyStatus::OnDutyNotDriving => "on_duty_not_driving",
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
        }
    }

    /// Row index in [`Self::ALL`]; used by grid rows and totals.
    pub fn index(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDutyNotDriving => 3,
        }
    }

    /// Driving and on-duty time both count against the 70-hour cycle.
    pub fn is_on_duty(&self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDutyNotDriving)
    }

    /// Off-duty and sleeper-berth time both qualify as rest.
    pub fn is_rest(&self) -> bool {
        !self.is_on_duty()
    }
}
