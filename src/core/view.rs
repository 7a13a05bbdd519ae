//! Top-level view selection.
//!
//! The admin password check here is a UI convenience gate, NOT an
//! authorization mechanism: there is no token, no session expiry and no
//! enforcement on the store side. Anyone with access to the store can read
//! every record.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Department(String),
    Class(String),
    Student(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Entry,
    AdminPasswordPrompt,
    AdminDashboard { selection: Option<Selection> },
}

#[derive(Debug, Clone)]
pub struct ViewRouter {
    view: View,
    password_input: String,
    credential: String,
}

impl ViewRouter {
    pub fn new(credential: &str) -> Self {
        Self {
            view: View::Entry,
            password_input: String::new(),
            credential: credential.to_string(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn password_input(&self) -> &str {
        &self.password_input
    }

    /// Entry → password prompt.
    pub fn request_admin(&mut self) {
        if self.view == View::Entry {
            self.password_input.clear();
            self.view = View::AdminPasswordPrompt;
        }
    }

    /// Exact match opens the dashboard. Otherwise stay on the prompt with a
    /// cleared input and return `false`.
    pub fn enter_password(&mut self, input: &str) -> bool {
        if self.view != View::AdminPasswordPrompt {
            return false;
        }

        self.password_input = input.to_string();
        if self.password_input == self.credential {
            self.password_input.clear();
            self.view = View::AdminDashboard { selection: None };
            true
        } else {
            self.password_input.clear();
            false
        }
    }

    /// Prompt → entry.
    pub fn cancel(&mut self) {
        if self.view == View::AdminPasswordPrompt {
            self.password_input.clear();
            self.view = View::Entry;
        }
    }

    /// Dashboard → entry.
    pub fn back(&mut self) {
        if matches!(self.view, View::AdminDashboard { .. }) {
            self.view = View::Entry;
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.view {
            View::AdminDashboard { selection } => selection.as_ref(),
            _ => None,
        }
    }

    fn toggle(&mut self, wanted: Selection) {
        if let View::AdminDashboard { selection } = &mut self.view {
            *selection = if selection.as_ref() == Some(&wanted) {
                None
            } else {
                Some(wanted)
            };
        }
    }

    /// Select a department card; selecting it again clears the selection.
    pub fn toggle_department(&mut self, department: &str) {
        self.toggle(Selection::Department(department.to_string()));
    }

    /// Class-profile counterpart of `toggle_department`.
    pub fn toggle_class(&mut self, class_name: &str) {
        self.toggle(Selection::Class(class_name.to_string()));
    }

    /// Expand a student's history; selecting it again collapses it.
    pub fn toggle_student(&mut self, roll_no: &str) {
        self.toggle(Selection::Student(roll_no.to_string()));
    }
}
