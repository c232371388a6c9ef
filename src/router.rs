//! View router: one active section, exactly one mounted view

use tracing::{info, warn};

use crate::core::{Module, Section};
use crate::modules::{
    AppointmentScheduler, Dashboard, ExerciseTracker, ProfilePlaceholder, SecureMessaging,
    VitalsMonitor,
};

/// The mounted view. View state lives here and is dropped on unmount.
pub enum SectionView {
    Dashboard(Dashboard),
    Appointments(AppointmentScheduler),
    Exercise(ExerciseTracker),
    Vitals(VitalsMonitor),
    Messages(SecureMessaging),
    Profile(ProfilePlaceholder),
}

impl SectionView {
    /// Fresh view for a section
    pub fn mount(section: Section) -> Self {
        match section {
            Section::Dashboard => SectionView::Dashboard(Dashboard::new()),
            Section::Appointments => SectionView::Appointments(AppointmentScheduler::new()),
            Section::Exercise => SectionView::Exercise(ExerciseTracker::new()),
            Section::Vitals => SectionView::Vitals(VitalsMonitor::new()),
            Section::Messages => SectionView::Messages(SecureMessaging::new()),
            Section::Profile => SectionView::Profile(ProfilePlaceholder),
        }
    }

    pub fn as_module(&self) -> &dyn Module {
        match self {
            SectionView::Dashboard(view) => view,
            SectionView::Appointments(view) => view,
            SectionView::Exercise(view) => view,
            SectionView::Vitals(view) => view,
            SectionView::Messages(view) => view,
            SectionView::Profile(view) => view,
        }
    }

    pub fn as_module_mut(&mut self) -> &mut dyn Module {
        match self {
            SectionView::Dashboard(view) => view,
            SectionView::Appointments(view) => view,
            SectionView::Exercise(view) => view,
            SectionView::Vitals(view) => view,
            SectionView::Messages(view) => view,
            SectionView::Profile(view) => view,
        }
    }
}

pub struct Router {
    active: Section,
    view: SectionView,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

impl Router {
    pub fn new(initial: Section) -> Self {
        Self {
            active: initial,
            view: SectionView::mount(initial),
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Switch sections. Re-selecting the active one keeps its view state.
    pub fn select(&mut self, section: Section) {
        if section == self.active {
            return;
        }
        info!(from = %self.active, to = %section, "section changed");
        self.active = section;
        self.view = SectionView::mount(section);
    }

    /// Select by identifier; anything unrecognised lands on the dashboard
    pub fn select_id(&mut self, id: &str) -> Section {
        let section = match id.parse::<Section>() {
            Ok(section) => section,
            Err(err) => {
                warn!(%err, "falling back to dashboard");
                Section::Dashboard
            }
        };
        self.select(section);
        section
    }

    pub fn view(&self) -> &dyn Module {
        self.view.as_module()
    }

    pub fn view_mut(&mut self) -> &mut dyn Module {
        self.view.as_module_mut()
    }

    pub fn mounted(&self) -> &SectionView {
        &self.view
    }

    pub fn mounted_mut(&mut self) -> &mut SectionView {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_is_total() {
        for section in Section::ALL {
            assert_eq!(SectionView::mount(section).as_module().section(), section);
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        let mut router = Router::new(Section::Vitals);
        assert_eq!(router.select_id("billing"), Section::Dashboard);
        assert_eq!(router.active(), Section::Dashboard);
        assert_eq!(router.select_id(" Messages "), Section::Messages);
        assert_eq!(router.view().section(), Section::Messages);
    }
}
