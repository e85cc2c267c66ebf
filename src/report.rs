use std::time::Duration;

use crate::recorder::FastestCall;

/// Per-call progress line, printed after every completed measurement.
pub fn progress_line(name: &str, elapsed: Duration) -> String {
    format!(
        "Total time taken to execute {} : {:.5} seconds",
        name,
        elapsed.as_secs_f64()
    )
}

/// Fastest-call summary, printed from the second completed call onward.
pub fn fastest_line(call: &FastestCall) -> String {
    format!(
        "Fastest test case was : {}({}) took {:.5} seconds",
        call.name,
        call.args,
        call.elapsed.as_secs_f64()
    )
}

pub fn speedup_line(ratio: f64) -> String {
    format!("Speed-up over the slowest call : {ratio:.2}x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_uses_five_decimal_places() {
        let line = progress_line("delay", Duration::from_millis(12));
        assert_eq!(
            line,
            "Total time taken to execute delay : 0.01200 seconds"
        );
    }

    #[test]
    fn fastest_line_names_the_call_and_its_arguments() {
        let call = FastestCall {
            name: "delay".into(),
            args: "secs=0.01".into(),
            elapsed: Duration::from_millis(10),
        };
        assert_eq!(
            fastest_line(&call),
            "Fastest test case was : delay(secs=0.01) took 0.01000 seconds"
        );
    }

    #[test]
    fn speedup_line_rounds_to_two_decimals() {
        assert_eq!(speedup_line(5.0), "Speed-up over the slowest call : 5.00x");
        assert_eq!(
            speedup_line(1.2345),
            "Speed-up over the slowest call : 1.23x"
        );
    }
}
