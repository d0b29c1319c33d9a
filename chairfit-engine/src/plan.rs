use chairfit_model::profile::{BodyType, DreamBody, Profile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phase {
    pub title: &'static str,
    pub description: &'static str,
    /// 1 (gentle) to 5 (demanding).
    pub difficulty: u8,
    pub first_day: u8,
    pub last_day: u8,
}

impl Phase {
    pub fn days(&self) -> String {
        format!("Days {}-{}", self.first_day, self.last_day)
    }
}

/// The 21-day programme built for the profile.
pub fn phases(profile: &Profile) -> [Phase; 3] {
    let wants_fit = profile.dream_body == Some(DreamBody::Fit);
    [
        Phase {
            title: "Phase 1",
            description: "Daily chair exercises to strengthen the core and improve posture",
            difficulty: 5,
            first_day: 1,
            last_day: 7,
        },
        Phase {
            title: "Phase 2",
            description: "Progression to more challenging moves that help burn calories and build strength",
            difficulty: if profile.body_type == Some(BodyType::Plus) { 3 } else { 4 },
            first_day: 8,
            last_day: 14,
        },
        Phase {
            title: "Phase 3",
            description: if wants_fit {
                "Advanced exercises for muscle toning and definition"
            } else {
                "Balanced movements for overall wellbeing and mobility"
            },
            difficulty: if wants_fit { 5 } else { 3 },
            first_day: 15,
            last_day: 21,
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub threshold: u8,
    pub title: &'static str,
}

pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        threshold: 25,
        title: "Analysing your profile...",
    },
    Milestone {
        threshold: 50,
        title: "Creating your personalised plan...",
    },
    Milestone {
        threshold: 75,
        title: "Optimising exercises for your body type...",
    },
    Milestone {
        threshold: 95,
        title: "Finishing your plan...",
    },
    Milestone {
        threshold: 100,
        title: "Plan complete!",
    },
];

/// Highest milestone reached at `progress` percent; the first one is shown
/// from the start.
pub fn milestone(progress: u8) -> &'static Milestone {
    MILESTONES
        .iter()
        .rev()
        .find(|m| progress >= m.threshold)
        .unwrap_or(&MILESTONES[0])
}

/// Phases are revealed one by one as the plan creation progresses.
pub fn revealed_phases(progress: u8) -> usize {
    (1..=3).take_while(|n| progress as usize > n * 25).count()
}
