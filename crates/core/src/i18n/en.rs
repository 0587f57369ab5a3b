//! English strings

pub(super) static STRINGS: &[(&str, &str)] = &[
    // Common
    ("app.name", "Freelo"),
    ("common.other", "Other"),
    ("common.invalidValue", "Invalid value"),
    ("common.unknownCommand", "Unknown command"),
    ("common.notAvailable", "Not available on this page"),
    ("common.error", "Something went wrong"),
    ("auth.required", "Please sign in to continue"),
    // Navigation
    ("nav.home", "Home"),
    ("nav.events", "Events"),
    ("nav.privateEvents", "Private Events"),
    ("nav.saved", "Saved"),
    ("nav.login", "Login"),
    ("nav.signup", "Sign Up"),
    ("nav.logout", "Log Out"),
    ("nav.addEvent", "Add Event"),
    // Hero
    ("hero.title", "Events for the Open-Minded"),
    (
        "hero.description",
        "Connect with a community that celebrates authenticity, diversity, and freedom of expression.",
    ),
    ("hero.cta", "Discover Events"),
    // Event sections
    ("upcoming.title", "Upcoming Events"),
    ("upcoming.viewAll", "View All"),
    ("private.title", "Private Events"),
    ("private.description", "Exclusive events for our community members."),
    ("private.join", "Join to Access"),
    ("recent.title", "Recently Added"),
    // Event card
    ("event.viewEvent", "View Event"),
    ("event.date", "Date"),
    ("event.time", "Time"),
    ("event.location", "Location"),
    ("event.new", "New"),
    ("event.private", "Private"),
    ("event.category", "Category"),
    // Membership
    ("membership.title", "Join Our Private Community"),
    (
        "membership.description",
        "Get access to exclusive events, connect with like-minded individuals, and enjoy a space where privacy and respect are paramount.",
    ),
    ("membership.cta", "Become a Member"),
    // Footer
    ("footer.about", "About Us"),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    ("footer.contact", "Contact"),
    ("footer.faq", "FAQ"),
    ("footer.rights", "All rights reserved"),
    ("notFound.title", "Page not found"),
    // Add event
    ("addEvent.title", "Add an Event"),
    ("addEvent.description", "Tell the community about your event."),
    ("addEvent.basicInfo", "Basic Information"),
    ("addEvent.name", "Event Name"),
    ("addEvent.namePlaceholder", "Give your event a name"),
    ("addEvent.host", "Host"),
    ("addEvent.hostDescription", "Shown as the organizer of the event"),
    ("addEvent.hostPlaceholder", "Host name"),
    ("addEvent.date", "Date"),
    ("addEvent.selectDate", "Select a date"),
    ("addEvent.time", "Time"),
    ("addEvent.startTime", "Start Time"),
    ("addEvent.endTime", "End Time"),
    ("addEvent.type", "Event Type"),
    ("addEvent.location", "Location"),
    ("addEvent.locationType", "Location Type"),
    ("addEvent.address", "Address"),
    ("addEvent.addressPlaceholder", "Street, city"),
    ("addEvent.details", "Event Details"),
    ("addEvent.descriptionField", "Description"),
    ("addEvent.descriptionPlaceholder", "What should attendees know?"),
    ("addEvent.attendeeLimit", "Attendee Limit"),
    ("addEvent.accessMode", "Access"),
    ("addEvent.eventHas", "The Event Has"),
    ("addEvent.attendeeType", "Who Can Attend"),
    ("addEvent.ageRange", "Age Range"),
    ("addEvent.ticketLink", "Ticket Link"),
    ("addEvent.image", "Event Image"),
    ("addEvent.required", "Please fill in all required fields"),
    ("addEvent.submit", "Continue to Publishing"),
    ("addEvent.submitting", "Saving..."),
    ("addEvent.success", "Event details saved"),
    // Option labels
    ("eventType.fetish", "Fetish"),
    ("eventType.swingers", "Swingers"),
    ("eventType.orgy", "Orgy"),
    ("eventType.lifestyle", "Lifestyle"),
    ("eventType.private", "Private"),
    ("eventType.bdsm", "BDSM"),
    ("eventType.couples", "Couples"),
    ("eventType.mixed", "Mixed"),
    ("locationType.club", "Club"),
    ("locationType.privateHome", "Private Home"),
    ("locationType.outdoors", "Outdoors"),
    ("locationType.bar", "Bar"),
    ("locationType.hotel", "Hotel"),
    ("locationType.publicSpace", "Public Space"),
    ("attendeeLimit.10", "Up to 10"),
    ("attendeeLimit.20", "Up to 20"),
    ("attendeeLimit.30", "Up to 30"),
    ("attendeeLimit.40", "Up to 40"),
    ("attendeeLimit.50", "Up to 50"),
    ("attendeeLimit.100", "Up to 100"),
    ("attendeeLimit.unlimited", "Unlimited"),
    ("accessMode.free", "Free entry"),
    ("accessMode.registration", "Registration required"),
    ("eventHas.genderMix", "Gender mix"),
    ("eventHas.bdsm", "BDSM"),
    ("eventHas.noSexual", "No sexual activity"),
    ("eventHas.publicMix", "Public mix"),
    ("attendeeType.all", "Everyone"),
    ("attendeeType.verified", "Verified members"),
    ("attendeeType.menOnly", "Men only"),
    ("attendeeType.womenOnly", "Women only"),
    ("attendeeType.couplesOnly", "Couples only"),
    ("attendeeType.invitation", "By invitation"),
    ("attendeeType.lgbtq", "LGBTQ+"),
    ("ageRange.noLimit", "No limit"),
    ("ageRange.25to45", "25-45"),
    ("ageRange.30to50", "30-50"),
    // Publish options
    ("publishOptions.title", "Choose How to Publish"),
    ("publishOptions.description", "Pick the package that fits your event."),
    ("publishOptions.freeTitle", "Free Listing"),
    ("publishOptions.freeDescription", "A standard listing on the events page."),
    ("publishOptions.free", "Free"),
    ("publishOptions.freeFeature1", "Listed on the events page"),
    ("publishOptions.freeFeature2", "Shareable event page"),
    ("publishOptions.featuredTitle", "Featured Event"),
    ("publishOptions.featuredDescription", "Stand out at the top of the listings."),
    ("publishOptions.featuredPrice", "₪49"),
    ("publishOptions.featuredFeature1", "Pinned to the home page"),
    ("publishOptions.featuredFeature2", "Highlighted card"),
    ("publishOptions.featuredFeature3", "Included in the newsletter"),
    ("publishOptions.extraLinksTitle", "Extra Links"),
    ("publishOptions.extraLinksDescription", "Add links to tickets, socials and more."),
    ("publishOptions.extraLinksPrice", "₪29"),
    ("publishOptions.extraLinksFeature1", "Unlimited extra links"),
    ("publishOptions.extraLinksFeature2", "Shown on the event page"),
    ("publishOptions.addExtraLinks", "Your links"),
    ("publishOptions.linkTitle", "Link title"),
    ("publishOptions.linkUrl", "URL"),
    ("publishOptions.addLink", "Add another link"),
    ("publishOptions.back", "Back"),
    ("publishOptions.publish", "Publish Event"),
    ("publishOptions.publishing", "Publishing..."),
    ("publishOptions.success", "Your event was published"),
    ("publishOptions.error", "Publishing failed, please try again"),
    // Auth
    ("auth.title", "Welcome"),
    ("auth.description", "Sign in or create an account"),
    ("login.success", "Signed in"),
    ("login.error", "Sign in failed"),
    ("login.errorRequiredFields", "Please enter your email and password"),
    ("login.processing", "Signing in..."),
    ("login.noAccount", "No account yet?"),
    ("signup.name", "Name"),
    ("signup.namePlaceholder", "Your name"),
    ("signup.email", "Email"),
    ("signup.emailPlaceholder", "you@example.com"),
    ("signup.password", "Password"),
    ("signup.passwordPlaceholder", "Choose a password"),
    ("signup.confirmPassword", "Confirm Password"),
    ("signup.confirmPasswordPlaceholder", "Repeat the password"),
    ("signup.agreeTerms", "I agree to the terms of service"),
    ("signup.termsLink", "terms of service"),
    ("signup.age18", "I am over 18"),
    ("signup.alreadyAccount", "Already have an account?"),
    ("signup.processing", "Creating account..."),
    ("signup.success", "Account created"),
    ("signup.error", "Sign up failed"),
    ("signup.errorRequiredFields", "Please fill in all required fields"),
    ("signup.errorPasswordMatch", "Passwords do not match"),
    ("signup.errorAgreement", "Please accept the terms and confirm your age"),
    ("signup.emailConfirmation", "Check your inbox to confirm your email"),
    ("signup.errorPasswordLength", "Password is too short"),
    ("signup.errorEmailTaken", "An account with this email already exists"),
    ("login.errorNotConfirmed", "Please confirm your email before signing in"),
    ("logout.success", "Signed out"),
    ("language.switched", "Language changed"),
];
