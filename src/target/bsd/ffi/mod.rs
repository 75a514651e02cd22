use libc::sockaddr_dl;

extern "C" {
    /// `LLADDR(sdl)`: pointer to the hardware address stored after the
    /// interface name in `sdl_data`.
    pub fn lladdr_datalink(sdl: *const sockaddr_dl) -> *const u8;
}
