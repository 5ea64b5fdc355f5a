//! Pure delegation of the whole [`Actuator`][crate::Actuator] surface.
//!
//! Both the selector and the live actuator are "hand every call to someone
//! else" types.  Writing the ~45 forwarding bodies by hand invites drift (a
//! swapped argument, a forgotten method), so they are generated from a single
//! method table.

/// Implement `Actuator` for `$ty` by forwarding each call to a delegate.
///
/// `ref |s| expr` must evaluate to something that implements `Actuator`
/// through a shared borrow; `mut |m| expr` through a mutable one.  The
/// expressions may use `?` to fail before delegation.
macro_rules! forward_actuator {
    (
        impl for $ty:ty;
        ref |$s:ident| $target:expr;
        mut |$m:ident| $target_mut:expr;
    ) => {
        impl $crate::Actuator for $ty {
            forward_actuator!(@mut $m, $target_mut;
                ahead(distance: f64) -> ();
                back(distance: f64) -> ();
                stop() -> ();
                resume() -> ();
                do_nothing() -> ();
                turn_left(degrees: f64) -> ();
                turn_right(degrees: f64) -> ();
                turn_gun_left(degrees: f64) -> ();
                turn_gun_right(degrees: f64) -> ();
                turn_radar_left(degrees: f64) -> ();
                turn_radar_right(degrees: f64) -> ();
                fire(power: f64) -> ();
                fire_bullet(power: f64) -> Option<rb_core::Bullet>;
                scan() -> ();
                set_all_colors(color: rb_core::Color) -> ();
                set_colors(body: rb_core::Color, gun: rb_core::Color, radar: rb_core::Color) -> ();
                set_body_color(color: rb_core::Color) -> ();
                set_bullet_color(color: rb_core::Color) -> ();
                set_gun_color(color: rb_core::Color) -> ();
                set_radar_color(color: rb_core::Color) -> ();
                set_scan_color(color: rb_core::Color) -> ();
                set_adjust_gun_for_robot_turn(independent: bool) -> ();
                set_adjust_radar_for_gun_turn(independent: bool) -> ();
                set_adjust_radar_for_robot_turn(independent: bool) -> ();
            );
            forward_actuator!(@ref $s, $target;
                body_color() -> rb_core::Color;
                bullet_color() -> rb_core::Color;
                gun_color() -> rb_core::Color;
                radar_color() -> rb_core::Color;
                scan_color() -> rb_core::Color;
                is_adjust_gun_for_robot_turn() -> bool;
                is_adjust_radar_for_gun_turn() -> bool;
                is_adjust_radar_for_robot_turn() -> bool;
                battle_field_width() -> f64;
                battle_field_height() -> f64;
                energy() -> f64;
                gun_cooling_rate() -> f64;
                gun_heading() -> f64;
                gun_heat() -> f64;
                heading() -> f64;
                width() -> f64;
                height() -> f64;
                velocity() -> f64;
                x() -> f64;
                y() -> f64;
                name() -> String;
                num_rounds() -> u32;
                others() -> u32;
                round_num() -> u32;
            );
        }
    };

    (@mut $m:ident, $target_mut:expr; $( $name:ident( $($arg:ident: $argty:ty),* ) -> $ret:ty; )* ) => {
        $(
            #[inline]
            fn $name(&mut self, $($arg: $argty),*) -> $crate::ActuatorResult<$ret> {
                let $m = self;
                $target_mut.$name($($arg),*)
            }
        )*
    };

    (@ref $s:ident, $target:expr; $( $name:ident() -> $ret:ty; )* ) => {
        $(
            #[inline]
            fn $name(&self) -> $crate::ActuatorResult<$ret> {
                let $s = self;
                $target.$name()
            }
        )*
    };
}
