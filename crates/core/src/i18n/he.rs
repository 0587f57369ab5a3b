//! Hebrew strings

pub(super) static STRINGS: &[(&str, &str)] = &[
    // Common
    ("app.name", "פרילו"),
    ("common.other", "אחר"),
    ("common.invalidValue", "ערך לא תקין"),
    ("common.unknownCommand", "פקודה לא מוכרת"),
    ("common.notAvailable", "לא זמין בעמוד זה"),
    ("common.error", "משהו השתבש"),
    ("auth.required", "יש להתחבר כדי להמשיך"),
    // Navigation
    ("nav.home", "בית"),
    ("nav.events", "אירועים"),
    ("nav.privateEvents", "אירועים פרטיים"),
    ("nav.saved", "שמור"),
    ("nav.login", "התחברות"),
    ("nav.signup", "הרשמה"),
    ("nav.logout", "התנתקות"),
    ("nav.addEvent", "הוספת אירוע"),
    // Hero
    ("hero.title", "אירועים לפתוחי מחשבה"),
    ("hero.description", "התחבר לקהילה שחוגגת אותנטיות, גיוון וחופש ביטוי."),
    ("hero.cta", "גלה אירועים"),
    // Event sections
    ("upcoming.title", "אירועים קרובים"),
    ("upcoming.viewAll", "צפה בכולם"),
    ("private.title", "אירועים פרטיים"),
    ("private.description", "אירועים בלעדיים לחברי הקהילה שלנו."),
    ("private.join", "הצטרף לגישה"),
    ("recent.title", "נוספו לאחרונה"),
    // Event card
    ("event.viewEvent", "צפה באירוע"),
    ("event.date", "תאריך"),
    ("event.time", "שעה"),
    ("event.location", "מיקום"),
    ("event.new", "חדש"),
    ("event.private", "פרטי"),
    ("event.category", "קטגוריה"),
    // Membership
    ("membership.title", "הצטרף לקהילה הפרטית שלנו"),
    (
        "membership.description",
        "קבל גישה לאירועים בלעדיים, התחבר לאנשים עם תפיסת עולם דומה, ותיהנה ממרחב בו פרטיות וכבוד הם ערכים מרכזיים.",
    ),
    ("membership.cta", "הפוך לחבר"),
    // Footer
    ("footer.about", "אודותינו"),
    ("footer.privacy", "מדיניות פרטיות"),
    ("footer.terms", "תנאי שימוש"),
    ("footer.contact", "צור קשר"),
    ("footer.faq", "שאלות נפוצות"),
    ("footer.rights", "כל הזכויות שמורות"),
    ("notFound.title", "הדף לא נמצא"),
    // Add event
    ("addEvent.title", "הוספת אירוע"),
    ("addEvent.description", "ספר לקהילה על האירוע שלך."),
    ("addEvent.basicInfo", "פרטים בסיסיים"),
    ("addEvent.name", "שם האירוע"),
    ("addEvent.namePlaceholder", "תן שם לאירוע"),
    ("addEvent.host", "מארח"),
    ("addEvent.hostDescription", "יוצג כמארגן האירוע"),
    ("addEvent.hostPlaceholder", "שם המארח"),
    ("addEvent.date", "תאריך"),
    ("addEvent.selectDate", "בחר תאריך"),
    ("addEvent.time", "שעה"),
    ("addEvent.startTime", "שעת התחלה"),
    ("addEvent.endTime", "שעת סיום"),
    ("addEvent.type", "סוג האירוע"),
    ("addEvent.location", "מיקום"),
    ("addEvent.locationType", "סוג המקום"),
    ("addEvent.address", "כתובת"),
    ("addEvent.addressPlaceholder", "רחוב, עיר"),
    ("addEvent.details", "פרטי האירוע"),
    ("addEvent.descriptionField", "תיאור"),
    ("addEvent.descriptionPlaceholder", "מה חשוב שהמשתתפים ידעו?"),
    ("addEvent.attendeeLimit", "מספר משתתפים"),
    ("addEvent.accessMode", "כניסה"),
    ("addEvent.eventHas", "באירוע יש"),
    ("addEvent.attendeeType", "מי יכול להשתתף"),
    ("addEvent.ageRange", "טווח גילאים"),
    ("addEvent.ticketLink", "קישור לכרטיסים"),
    ("addEvent.image", "תמונת האירוע"),
    ("addEvent.required", "נא למלא את כל שדות החובה"),
    ("addEvent.submit", "המשך לפרסום"),
    ("addEvent.submitting", "שומר..."),
    ("addEvent.success", "פרטי האירוע נשמרו"),
    // Option labels
    ("eventType.fetish", "פטיש"),
    ("eventType.swingers", "סווינגרס"),
    ("eventType.orgy", "אורגיה"),
    ("eventType.lifestyle", "לייפסטייל"),
    ("eventType.private", "פרטי"),
    ("eventType.bdsm", "BDSM"),
    ("eventType.couples", "זוגות"),
    ("eventType.mixed", "מעורב"),
    ("locationType.club", "מועדון"),
    ("locationType.privateHome", "בית פרטי"),
    ("locationType.outdoors", "בחוץ"),
    ("locationType.bar", "בר"),
    ("locationType.hotel", "מלון"),
    ("locationType.publicSpace", "מרחב ציבורי"),
    ("attendeeLimit.10", "עד 10"),
    ("attendeeLimit.20", "עד 20"),
    ("attendeeLimit.30", "עד 30"),
    ("attendeeLimit.40", "עד 40"),
    ("attendeeLimit.50", "עד 50"),
    ("attendeeLimit.100", "עד 100"),
    ("attendeeLimit.unlimited", "ללא הגבלה"),
    ("accessMode.free", "כניסה חופשית"),
    ("accessMode.registration", "בהרשמה מראש"),
    ("eventHas.genderMix", "תמהיל מגדרי"),
    ("eventHas.bdsm", "BDSM"),
    ("eventHas.noSexual", "ללא פעילות מינית"),
    ("eventHas.publicMix", "קהל מעורב"),
    ("attendeeType.all", "כולם"),
    ("attendeeType.verified", "חברים מאומתים"),
    ("attendeeType.menOnly", "גברים בלבד"),
    ("attendeeType.womenOnly", "נשים בלבד"),
    ("attendeeType.couplesOnly", "זוגות בלבד"),
    ("attendeeType.invitation", "בהזמנה"),
    ("attendeeType.lgbtq", "להט\"ב"),
    ("ageRange.noLimit", "ללא הגבלה"),
    ("ageRange.25to45", "25-45"),
    ("ageRange.30to50", "30-50"),
    // Publish options
    ("publishOptions.title", "בחר איך לפרסם"),
    ("publishOptions.description", "בחר את החבילה שמתאימה לאירוע שלך."),
    ("publishOptions.freeTitle", "פרסום חינם"),
    ("publishOptions.freeDescription", "רישום רגיל בעמוד האירועים."),
    ("publishOptions.free", "חינם"),
    ("publishOptions.freeFeature1", "מופיע בעמוד האירועים"),
    ("publishOptions.freeFeature2", "עמוד אירוע לשיתוף"),
    ("publishOptions.featuredTitle", "אירוע מומלץ"),
    ("publishOptions.featuredDescription", "בלוט בראש הרשימות."),
    ("publishOptions.featuredPrice", "₪49"),
    ("publishOptions.featuredFeature1", "מוצמד לדף הבית"),
    ("publishOptions.featuredFeature2", "כרטיס מודגש"),
    ("publishOptions.featuredFeature3", "נכלל בניוזלטר"),
    ("publishOptions.extraLinksTitle", "קישורים נוספים"),
    ("publishOptions.extraLinksDescription", "הוסף קישורים לכרטיסים, רשתות חברתיות ועוד."),
    ("publishOptions.extraLinksPrice", "₪29"),
    ("publishOptions.extraLinksFeature1", "קישורים ללא הגבלה"),
    ("publishOptions.extraLinksFeature2", "מוצגים בעמוד האירוע"),
    ("publishOptions.addExtraLinks", "הקישורים שלך"),
    ("publishOptions.linkTitle", "כותרת הקישור"),
    ("publishOptions.linkUrl", "כתובת"),
    ("publishOptions.addLink", "הוסף קישור"),
    ("publishOptions.back", "חזרה"),
    ("publishOptions.publish", "פרסם אירוע"),
    ("publishOptions.publishing", "מפרסם..."),
    ("publishOptions.success", "האירוע שלך פורסם"),
    ("publishOptions.error", "הפרסום נכשל, נסה שוב"),
    // Auth
    ("auth.title", "ברוכים הבאים"),
    ("auth.description", "התחבר או צור חשבון"),
    ("login.success", "התחברת בהצלחה"),
    ("login.error", "ההתחברות נכשלה"),
    ("login.errorRequiredFields", "נא להזין אימייל וסיסמה"),
    ("login.processing", "מתחבר..."),
    ("login.noAccount", "אין לך חשבון?"),
    ("signup.name", "שם"),
    ("signup.namePlaceholder", "השם שלך"),
    ("signup.email", "אימייל"),
    ("signup.emailPlaceholder", "you@example.com"),
    ("signup.password", "סיסמה"),
    ("signup.passwordPlaceholder", "בחר סיסמה"),
    ("signup.confirmPassword", "אימות סיסמה"),
    ("signup.confirmPasswordPlaceholder", "הזן שוב את הסיסמה"),
    ("signup.agreeTerms", "אני מסכים לתנאי השימוש"),
    ("signup.termsLink", "תנאי השימוש"),
    ("signup.age18", "אני מעל גיל 18"),
    ("signup.alreadyAccount", "כבר יש לך חשבון?"),
    ("signup.processing", "יוצר חשבון..."),
    ("signup.success", "החשבון נוצר"),
    ("signup.error", "ההרשמה נכשלה"),
    ("signup.errorRequiredFields", "נא למלא את כל שדות החובה"),
    ("signup.errorPasswordMatch", "הסיסמאות אינן תואמות"),
    ("signup.errorAgreement", "נא לאשר את התנאים ואת הגיל"),
    ("signup.emailConfirmation", "בדוק את תיבת הדואר כדי לאשר את האימייל"),
    ("signup.errorPasswordLength", "הסיסמה קצרה מדי"),
    ("signup.errorEmailTaken", "כבר קיים חשבון עם כתובת האימייל הזו"),
    ("login.errorNotConfirmed", "יש לאשר את כתובת האימייל לפני ההתחברות"),
    ("logout.success", "התנתקת"),
    ("language.switched", "השפה הוחלפה"),
];
