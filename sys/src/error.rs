

pub type Ret<T> = Result<T, Error>;
pub type Rerr = Ret<()>;


#[macro_export]
macro_rules! errf {
    ( $f: expr $(, $v: expr )* ) => {
        Err(format!( $f $(, $v )* ))
    };
}

#[macro_export]
macro_rules! never {
    () => {
        unimplemented!()
    };
}

#[macro_export]
macro_rules! maybe {
    ($c:expr, $v1:expr, $v2:expr) => {
        match $c {
            true => $v1,
            false => $v2,
        }
    };
}
