//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, EventsTexts, FormTexts, HintTexts, KeyNames, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Trip Planner TUI",
        quit: "Quit",
        loading: "Loading...",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            select: "Select",
            edit: "Edit",
            save: "Save",
            delete: "Delete",
            close: "Close",
            cancel: "Cancel",
            next_field: "Next field",
            change_option: "Change",
            toggle_offer: "Toggle offer",
            reload: "Reload",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    events: EventsTexts {
        title: "Trip Events",
        no_events: "No trip events yet",
        no_events_hint: "Add events to the data file, then press Alt+r to reload.",
        offers_prefix: "+",
        unknown_destination: "Unknown destination",
        total: "Total",
    },

    form: FormTexts {
        title: "Edit event",
        event_type: "Type",
        destination: "Destination",
        date_from: "From",
        date_to: "To",
        price: "Price, €",
        offers: "Offers",
        no_offers: "No offers for this type",
        pictures: "Pictures",
        save: "Save",
        saving: "Saving...",
        delete: "Delete",
        deleting: "Deleting...",
        close: "Close",
        invalid_date: "Dates must look like 2024-03-18 10:30",
        invalid_price: "Price must be a whole number",
        missing_destination: "Choose a destination",
    },

    status_bar: StatusBarTexts {
        ready: "Ready",
        saving: "Saving...",
        deleting: "Deleting...",
        saved: "Event saved",
        deleted: "Event deleted",
        save_failed: "Could not save event",
        delete_failed: "Could not delete event",
        reloading: "Reloading...",
        load_failed: "Could not load events",
    },
};
