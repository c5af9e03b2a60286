

/*
* one kernel contract method: forward execution plus its
* rollback companion invoked when the host chain reorganizes
*/
pub trait KernelOp : Send + Sync {
    fn name(&self) -> &'static str { never!() }
    fn root_only(&self) -> bool { false }
    // marks the rollbacks that are no-ops by design
    fn rollback_noop(&self) -> bool { false }
    fn run(&self, _: &Kernel, _: &mut KernelExec, _: &TxDesc) -> Rerr { never!() }
    fn rollback(&self, _: &Kernel, _: &mut KernelExec, _: &TxDesc) -> Rerr { never!() }
}


macro_rules! kernel_op_define {
    ($class:ident, $root:expr, $backnoop:expr, $runfn:ident, $backfn:ident) => {

        pub struct $class;

        impl KernelOp for $class {
            fn name(&self) -> &'static str { stringify!($class) }
            fn root_only(&self) -> bool { $root }
            fn rollback_noop(&self) -> bool { $backnoop }
            fn run(&self, krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
                $runfn(krn, ex, desc)
            }
            fn rollback(&self, krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
                $backfn(krn, ex, desc)
            }
        }

    };
}


macro_rules! kernel_op_register {
    ( $( $kty:ident )+ ) => {

        pub fn find_kernel_op(name: &str) -> Option<&'static dyn KernelOp> {
            $(
                if name == stringify!($kty) {
                    return Some(&$kty)
                }
            )+
            None
        }

        pub fn kernel_method_names() -> Vec<&'static str> {
            vec![ $( stringify!($kty) ),+ ]
        }

    };
}
