// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dispatch table from [`Message`]s to typed [`Listener`] handlers.

use crate::event::{Event, Message, Phase};

use super::{Listener, Result};

/// Calls the typed handler of the `listener` matching the [`Phase`] of the
/// `message` and the variant of the `event`.
///
/// Combinations without a typed handler (e.g. an atomic [`Event::StepName`])
/// are no-ops. [`Event::Custom`] goes to [`Listener::custom()`] in any
/// [`Phase`].
///
/// # Errors
///
/// If the called handler fails.
pub fn deliver<L: Listener + ?Sized>(
    listener: &mut L,
    message: &Message,
    event: &Event<'_>,
) -> Result {
    use Phase as P;

    match (message.phase(), *event) {
        (P::Before, Event::StepResult(s)) => listener.before_step_result(s),
        (P::After, Event::StepResult(s)) => listener.after_step_result(s),
        (P::Before, Event::StepName(s)) => listener.before_step_name(s),
        (P::After, Event::StepName(s)) => listener.after_step_name(s),
        (P::Before, Event::MultilineArg(a)) => listener.before_multiline_arg(a),
        (P::After, Event::MultilineArg(a)) => listener.after_multiline_arg(a),
        (P::Before, Event::Exception { exception, status }) => {
            listener.before_exception(exception, status)
        }
        (P::After, Event::Exception { exception, status }) => {
            listener.after_exception(exception, status)
        }
        (P::Before, Event::Table(t)) => listener.before_table(t),
        (P::After, Event::Table(t)) => listener.after_table(t),
        (P::Before, Event::TableRow { index, cells }) => {
            listener.before_table_row(index, cells)
        }
        (P::After, Event::TableRow { index, cells }) => {
            listener.after_table_row(index, cells)
        }
        (P::On, Event::TableCellValue { column, value }) => {
            listener.table_cell_value(column, value)
        }
        (P::On, Event::DocString(d)) => listener.doc_string(d),
        (P::On, Event::Puts(m)) => listener.puts(m),
        (P::On, Event::Embed(e)) => listener.embed(e),
        (P::On, Event::ListenerFailed(f)) => listener.listener_failed(f),
        (_, Event::Custom(c)) => listener.custom(message, c),
        _ => Ok(()),
    }
}
