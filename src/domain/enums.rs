/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,  // Editing an existing task's fields
    DayChanged,   // Shown when midnight has passed, forces restart
}

/// Which pane receives navigation keys in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Calendar,
    Tasks,
}

impl Focus {
    /// The other pane
    pub fn toggled(self) -> Self {
        match self {
            Focus::Calendar => Focus::Tasks,
            Focus::Tasks => Focus::Calendar,
        }
    }
}

/// Field cursor inside the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Text,
    Date,
    Start,
    End,
    Repeat,
}

impl EditField {
    /// Form fields in display order
    pub const ALL: [EditField; 5] = [
        EditField::Text,
        EditField::Date,
        EditField::Start,
        EditField::End,
        EditField::Repeat,
    ];

    /// Next field in the Tab cycle, wrapping at the end
    pub fn next(self) -> Self {
        match self {
            EditField::Text => EditField::Date,
            EditField::Date => EditField::Start,
            EditField::Start => EditField::End,
            EditField::End => EditField::Repeat,
            EditField::Repeat => EditField::Text,
        }
    }

    /// Previous field in the cycle, wrapping at the start
    pub fn prev(self) -> Self {
        match self {
            EditField::Text => EditField::Repeat,
            EditField::Date => EditField::Text,
            EditField::Start => EditField::Date,
            EditField::End => EditField::Start,
            EditField::Repeat => EditField::End,
        }
    }

    /// Label shown next to the field in the form
    pub fn label(self) -> &'static str {
        match self {
            EditField::Text => "Text",
            EditField::Date => "Date",
            EditField::Start => "Start",
            EditField::End => "End",
            EditField::Repeat => "Repeat",
        }
    }
}
