// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Projetos,
    Defeitos,
}

impl Screen {
    /// Screens in navigation bar order.
    pub const ALL: [Screen; 2] = [Screen::Projetos, Screen::Defeitos];

    /// i18n key of the navigation bar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Projetos => "navbar-projetos",
            Screen::Defeitos => "navbar-defeitos",
        }
    }
}
