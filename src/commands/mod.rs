
pub(crate) mod add;
pub(crate) use add::*;

pub(crate) mod clean;
pub(crate) use clean::*;

pub(crate) mod ls;
pub(crate) use ls::*;

pub(crate) mod scan;
pub(crate) use scan::*;
