//! Provides some useful macros to avoid repetitive code.

/// A macro to define a custom activity state on [crate::construction::heuristics::RouteState].
/// Activity states are stored as a vector indexed by activity position in the tour.
macro_rules! custom_activity_state {
    ($vis:vis $name:ident typeof $type:ty) => {
        paste::paste! {
            #[doc = " Extends [RouteState] within a new ["[<$name ActivityState>]"]."]
            $vis trait [<$name ActivityState>] {
                #[doc = " Gets `"$name "` activity state."]
                fn [<get_ $name:snake:lower _at>](&self, activity_idx: usize) -> Option<&$type>;
                #[doc = " Gets all `"$name "` activity states."]
                fn [<get_ $name:snake:lower _states>](&self) -> Option<&Vec<$type>>;
                #[doc = " Sets `"$name "` activity states."]
                fn [<set_ $name:snake:lower _states>](&mut self, values: Vec<$type>);
                #[doc = " Removes `"$name "` activity states."]
                fn [<remove_ $name:snake:lower _states>](&mut self) -> bool;
            }

            // Define a dummy struct type which is used as a key.
            struct [<$name ActivityStateKey>];
            impl [<$name ActivityState>] for RouteState {
                fn [<get_ $name:snake:lower _at>](&self, activity_idx: usize) -> Option<&$type> {
                    self.get_activity_state_ex::<[<$name ActivityStateKey>], _>(activity_idx)
                }

                fn [<get_ $name:snake:lower _states>](&self) -> Option<&Vec<$type>> {
                    self.get_activity_states_ex::<[<$name ActivityStateKey>], _>()
                }

                fn [<set_ $name:snake:lower _states>](&mut self, values: Vec<$type>) {
                    self.set_activity_states_ex::<[<$name ActivityStateKey>], _>(values);
                }

                fn [<remove_ $name:snake:lower _states>](&mut self) -> bool {
                    self.remove_state_ex::<[<$name ActivityStateKey>]>()
                }
            }
        }
    };
}

/// A macro to define custom route state on [crate::construction::heuristics::RouteState].
macro_rules! custom_tour_state {
    ($vis:vis $name:ident typeof $type:ty) => {
        paste::paste! {
            #[doc = " Extends [RouteState] within a new ["[<$name TourState>]"]."]
            $vis trait [<$name TourState>] {
                #[doc = " Gets `"$name "` tour state."]
                fn [<get_ $name:snake:lower>](&self) -> Option<&$type>;
                #[doc = " Sets `"$name "` tour state."]
                fn [<set_ $name:snake:lower>](&mut self, value: $type);
                #[doc = " Removes `"$name "` tour state."]
                fn [<remove_ $name:snake:lower>](&mut self) -> bool;
            }

            // Define a dummy struct type which is used as a key
            struct [<$name TourStateKey>];
            impl [<$name TourState>] for RouteState {
                fn [<get_ $name:snake:lower>](&self) -> Option<&$type> {
                    self.get_tour_state_ex::<[<$name TourStateKey>], _>()
                }

                fn [<set_ $name:snake:lower>](&mut self, value: $type) {
                    self.set_tour_state_ex::<[<$name TourStateKey>], _>(value);
                }

                fn [<remove_ $name:snake:lower>](&mut self) -> bool {
                    self.remove_state_ex::<[<$name TourStateKey>]>()
                }
            }
        }
    };
}
