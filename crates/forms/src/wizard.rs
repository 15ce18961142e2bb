//! The four-step intake wizard.

pub const STEP_COUNT: u8 = 4;

/// One step of the intake flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: u8,
    pub title: &'static str,
}

pub const STEPS: [Step; STEP_COUNT as usize] = [
    Step { id: 1, title: "Business Information" },
    Step { id: 2, title: "Contact Information" },
    Step { id: 3, title: "Business Details" },
    Step { id: 4, title: "Agreement" },
];

pub fn step_title(id: u8) -> &'static str {
    STEPS
        .iter()
        .find(|step| step.id == id)
        .map(|step| step.title)
        .unwrap_or("Unknown Step")
}

/// Current position in the step flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: u8,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self { current: 1 }
    }

    pub fn current_step(&self) -> u8 {
        self.current
    }

    /// Completion percentage shown by the progress bar.
    pub fn progress(&self) -> u8 {
        self.current * 25
    }

    pub fn next(&mut self) {
        if self.current < STEP_COUNT {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Jump directly to a step (used when surfacing the first invalid
    /// field, which may live on an earlier step). Out-of-range ids clamp.
    pub fn go_to(&mut self, step: u8) {
        self.current = step.clamp(1, STEP_COUNT);
    }
}
