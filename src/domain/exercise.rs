use serde::Serialize;

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Flexibility,
}

impl ExerciseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Flexibility => "flexibility",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ExerciseCategory::Cardio => Tone::Primary,
            ExerciseCategory::Strength => Tone::Secondary,
            ExerciseCategory::Flexibility => Tone::Accent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Intensity::Low => Tone::Success,
            Intensity::Moderate => Tone::Warning,
            Intensity::High => Tone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: u32,
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub duration_min: u32,
    pub intensity: Intensity,
    pub calories: u32,
    pub completed: bool,
    pub date: &'static str,
}

#[derive(Debug, Clone)]
pub struct WorkoutPlan {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub exercises: Vec<Exercise>,
    pub total_duration_min: u32,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy)]
pub struct WeeklyStats {
    pub total_minutes: u32,
    pub goal_minutes: u32,
    pub workouts_completed: u32,
    pub calories_burned: u32,
    pub streak_days: u32,
}

impl WeeklyStats {
    /// Goal ratio for gauges, clamped to 0..=1
    pub fn goal_ratio(&self) -> f64 {
        if self.goal_minutes == 0 {
            return 0.0;
        }
        (self.total_minutes as f64 / self.goal_minutes as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecentWorkout {
    pub date: &'static str,
    pub duration_min: u32,
    pub label: &'static str,
    pub calories: u32,
}

/// Exercise timer toggle. Only tracks which exercise is selected; no clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running { exercise_id: u32 },
}

impl TimerState {
    /// Same id stops, any other id replaces the running one
    pub fn toggle(self, exercise_id: u32) -> Self {
        match self {
            TimerState::Running { exercise_id: running } if running == exercise_id => {
                TimerState::Idle
            }
            _ => TimerState::Running { exercise_id },
        }
    }

    pub fn running_id(&self) -> Option<u32> {
        match self {
            TimerState::Idle => None,
            TimerState::Running { exercise_id } => Some(*exercise_id),
        }
    }

    pub fn is_running(&self, exercise_id: u32) -> bool {
        self.running_id() == Some(exercise_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub minutes: u32,
    pub calories: u32,
}

impl ProgressSummary {
    /// Rounded completion percentage
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u16
    }
}

/// Aggregate over `(exercise, effective completed flag)` pairs
pub fn summarize<'a, I>(exercises: I) -> ProgressSummary
where
    I: IntoIterator<Item = (&'a Exercise, bool)>,
{
    exercises
        .into_iter()
        .fold(ProgressSummary::default(), |mut acc, (exercise, done)| {
            acc.total += 1;
            if done {
                acc.completed += 1;
                acc.minutes += exercise.duration_min;
                acc.calories += exercise.calories;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: u32, duration_min: u32, calories: u32, completed: bool) -> Exercise {
        Exercise {
            id,
            name: "test",
            category: ExerciseCategory::Cardio,
            duration_min,
            intensity: Intensity::Low,
            calories,
            completed,
            date: "2024-01-15",
        }
    }

    #[test]
    fn test_timer_toggle_same_id_stops() {
        let timer = TimerState::Idle.toggle(3);
        assert_eq!(timer, TimerState::Running { exercise_id: 3 });
        assert_eq!(timer.toggle(3), TimerState::Idle);
    }

    #[test]
    fn test_timer_toggle_other_id_replaces() {
        let timer = TimerState::Idle.toggle(3).toggle(4);
        assert!(timer.is_running(4));
        assert!(!timer.is_running(3));
    }

    #[test]
    fn test_summarize_counts_only_completed() {
        let items = vec![
            exercise(1, 5, 25, true),
            exercise(2, 20, 120, true),
            exercise(3, 10, 40, false),
        ];
        let summary = summarize(items.iter().map(|e| (e, e.completed)));
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.minutes, 25);
        assert_eq!(summary.calories, 145);
        assert_eq!(summary.percent(), 67);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary.percent(), 0);
    }

    #[test]
    fn test_lookup_tables() {
        assert_eq!(ExerciseCategory::Strength.tone(), Tone::Secondary);
        assert_eq!(Intensity::High.tone(), Tone::Destructive);
        assert_eq!(Difficulty::Intermediate.label(), "intermediate");
    }
}
