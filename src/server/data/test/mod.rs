mod mentee;
mod response;
