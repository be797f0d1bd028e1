//! Leptos Advent Calendar
//!
//! Decorative SVG advent calendar for Leptos. Fixed grid geometry with
//! randomized door colors; only days that have arrived in December are
//! interactive. Opened doors live in a signal and reset on reload.

use leptos::prelude::*;

/// Door fill palette
const DOOR_COLORS: &[&str] = &[
    "#c0392b", "#27ae60", "#d4ac0d", "#8e44ad", "#2471a3", "#ca6f1e",
];

const DOOR_COUNT: u32 = 24;
const COLUMNS: u32 = 6;
const DOOR_SIZE: u32 = 56;
const DOOR_GAP: u32 = 10;
const MARGIN: u32 = 12;

/// js-sys Date months are zero-based
const DECEMBER: u32 = 11;

/// Top-left corner of a door cell in the fixed grid
pub fn door_origin(index: u32) -> (u32, u32) {
    let col = index % COLUMNS;
    let row = index / COLUMNS;
    (
        MARGIN + col * (DOOR_SIZE + DOOR_GAP),
        MARGIN + row * (DOOR_SIZE + DOOR_GAP),
    )
}

/// Total canvas size of the fixed grid
pub fn calendar_size() -> (u32, u32) {
    let rows = DOOR_COUNT.div_ceil(COLUMNS);
    (
        2 * MARGIN + COLUMNS * DOOR_SIZE + (COLUMNS - 1) * DOOR_GAP,
        2 * MARGIN + rows * DOOR_SIZE + (rows - 1) * DOOR_GAP,
    )
}

/// A door may be opened once its day has arrived, and only in December
pub fn is_openable(day: u32, month: u32, today: u32) -> bool {
    month == DECEMBER && day <= today
}

/// Pick a door color from a random roll in [0, 1)
pub fn door_color(roll: f64) -> &'static str {
    let index = ((roll * DOOR_COLORS.len() as f64) as usize).min(DOOR_COLORS.len() - 1);
    DOOR_COLORS[index]
}

#[component]
pub fn AdventCalendar() -> impl IntoView {
    let (opened, set_opened) = signal(Vec::<u32>::new());

    let now = js_sys::Date::new_0();
    let month = now.get_month();
    let today = now.get_date();

    let (width, height) = calendar_size();

    view! {
        <svg
            class="advent-calendar"
            width=width.to_string()
            height=height.to_string()
            viewBox=format!("0 0 {} {}", width, height)
        >
            {(0..DOOR_COUNT).map(|index| {
                let day = index + 1;
                let (x, y) = door_origin(index);
                let color = door_color(js_sys::Math::random());
                let openable = is_openable(day, month, today);
                let is_open = move || opened.get().contains(&day);

                view! {
                    <g
                        class="advent-door"
                        class:openable=openable
                        class:open=is_open
                        on:click=move |_| {
                            if openable {
                                set_opened.update(|open| {
                                    if !open.contains(&day) {
                                        open.push(day);
                                    }
                                });
                            }
                        }
                    >
                        <rect
                            x=x.to_string()
                            y=y.to_string()
                            width=DOOR_SIZE.to_string()
                            height=DOOR_SIZE.to_string()
                            rx="6"
                            fill=color
                        />
                        <text
                            x=(x + DOOR_SIZE / 2).to_string()
                            y=(y + DOOR_SIZE / 2 + 6).to_string()
                        >
                            {move || if is_open() { "★".to_string() } else { day.to_string() }}
                        </text>
                    </g>
                }
            }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_origin_grid() {
        assert_eq!(door_origin(0), (MARGIN, MARGIN));
        assert_eq!(door_origin(1), (MARGIN + DOOR_SIZE + DOOR_GAP, MARGIN));
        // First cell of the second row
        assert_eq!(door_origin(COLUMNS), (MARGIN, MARGIN + DOOR_SIZE + DOOR_GAP));
    }

    #[test]
    fn test_all_doors_fit_the_canvas() {
        let (width, height) = calendar_size();
        for index in 0..DOOR_COUNT {
            let (x, y) = door_origin(index);
            assert!(x + DOOR_SIZE + MARGIN <= width);
            assert!(y + DOOR_SIZE + MARGIN <= height);
        }
    }

    #[test]
    fn test_openable_only_in_december_up_to_today() {
        assert!(is_openable(1, DECEMBER, 6));
        assert!(is_openable(6, DECEMBER, 6));
        assert!(!is_openable(7, DECEMBER, 6));
        assert!(!is_openable(1, 10, 6));
    }

    #[test]
    fn test_door_color_stays_in_palette() {
        assert_eq!(door_color(0.0), DOOR_COLORS[0]);
        assert_eq!(door_color(0.999), DOOR_COLORS[DOOR_COLORS.len() - 1]);
        // A roll of exactly 1.0 still lands inside the palette
        assert_eq!(door_color(1.0), DOOR_COLORS[DOOR_COLORS.len() - 1]);
    }
}
