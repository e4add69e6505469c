/// An HTTP status.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Status {
    /// The status code.
    pub code: u16,
    /// The reason for the status.
    pub reason: &'static str,
}

macro_rules! status_codes {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $num:expr, $phrase:expr);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: Status = Status { code: $num, reason: $phrase };
        )+
    }
}

status_codes! {
    (OK, 200, "OK");
    (CREATED, 201, "Created");
    (BAD_REQUEST, 400, "Bad Request");
    (NOT_FOUND, 404, "Not Found");
    (INTERNAL_SERVER_ERROR, 500, "Internal Server Error");
}
