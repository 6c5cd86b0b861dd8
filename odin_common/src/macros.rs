/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

/// macro to flatten nested "if let .." trees into a construct akin to Scala for-comprehensions.
/// Each arm binds for the following arms, the last arm is followed by the expression that gets
/// evaluated if all matches succeeded:
/// ```
/// use odin_common::if_let;
/// let cols = vec!["ra", "earth"];
/// if_let! {
///     Some(field) = cols.get(0),
///     Some(key) = cols.get(1) => {
///         println!("field={field}, key={key}");
///     }
/// }
/// ```
/// An arm can have an `else` block that is evaluated if its match fails, in which case both the
/// match expression and the else clause have to be blocks.
#[macro_export]
macro_rules! if_let {
    //--- the leafs
    { $p:pat = $x:block else $e:block => $r:expr } => {
        if let $p = $x { $r } else $e
    };
    { $p:pat = $x:expr => $r:expr } => {
        if let $p = $x { $r }
    };

    //--- the recursive tt munchers
    { $p:pat = $x:block else $e:block , $($ts:tt)+ } => {
        if let $p = $x { $crate::if_let! { $($ts)+ } } else $e
    };
    { $p:pat = $x:expr , $($ts:tt)+ } => {
        if let $p = $x {
            $crate::if_let! { $($ts)+ }
        }
    };
}
pub use if_let; // preserve 'macros' module across crates

//--- macros that are useful to map errors (also to thiserror defined enums)

/// map an error type we don't want to expose into a String based variant of our own error enum
#[macro_export]
macro_rules! map_to_opaque_error {
    ($from_error:ty => $to_error:ident :: $variant:ident) => {
        impl From<$from_error> for $to_error {
            fn from (e: $from_error)->Self { $to_error :: $variant ( e.to_string()) }
        }
    };
}
pub use map_to_opaque_error;
